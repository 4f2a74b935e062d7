//! Per-kind transition rules
//!
//! Each active kind has one handler. Handlers receive an in-bounds cell that
//! holds their kind and inspect at most one neighbor per decision; any
//! neighbor past the grid edge means the rule does not apply.
//!
//! Dispatch goes through [`RULES`], indexed by [`ParticleKind::index`].
//! Empty, Metal and Glass have no entry.

use crate::grid::{Cell, Grid};
use crate::particle::ParticleKind;
use crate::rng_trait::SimRng;
use crate::stats::SimStats;

/// Chance per update that a fire cell burns out
pub const FIRE_BURNOUT_CHANCE: f32 = 0.1;

/// Chance per blocked update that a steam cell dissipates
pub const STEAM_DISSIPATE_CHANCE: f32 = 0.1;

/// Signature shared by all rule handlers
pub type RuleFn = fn(&mut Grid, Cell, &mut dyn SimRng, &mut dyn SimStats);

/// Rule table, one slot per [`ParticleKind`]
pub const RULES: [Option<RuleFn>; ParticleKind::COUNT] = [
    None,                         // Empty
    None,                         // Metal
    Some(update_sand as RuleFn),  // Sand
    Some(update_water as RuleFn), // Water
    Some(update_oil as RuleFn),   // Oil
    Some(update_acid as RuleFn),  // Acid
    Some(update_fire as RuleFn),  // Fire
    Some(update_steam as RuleFn), // Steam
    None,                         // Glass
];

/// Look up the handler for a kind
pub fn rule_for(kind: ParticleKind) -> Option<RuleFn> {
    RULES[kind.index()]
}

/// Apply the rule of whatever occupies `cell`
pub(crate) fn apply_rule(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if let Some(rule) = rule_for(grid.at(cell)) {
        rule(grid, cell, rng, stats);
    }
}

/// Horizontal step for a 50/50 side choice
fn random_side(rng: &mut dyn SimRng) -> isize {
    if rng.gen_bool() { -1 } else { 1 }
}

/// Swap `cell` with its neighbor at the offset when `accepts` the neighbor's kind
fn try_move(
    grid: &mut Grid,
    cell: Cell,
    d_row: isize,
    d_col: isize,
    accepts: fn(ParticleKind) -> bool,
    stats: &mut dyn SimStats,
) -> bool {
    match grid.offset(cell, d_row, d_col) {
        Some(target) if accepts(grid.at(target)) => {
            grid.exchange(cell, target);
            stats.record_particle_moved();
            true
        }
        _ => false,
    }
}

fn is_empty(kind: ParticleKind) -> bool {
    kind == ParticleKind::Empty
}

fn is_empty_or_water(kind: ParticleKind) -> bool {
    matches!(kind, ParticleKind::Empty | ParticleKind::Water)
}

/// Sand falls through empty space and sinks through water, sliding diagonally
/// when blocked. Sand on the bottom row never moves.
pub fn update_sand(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if grid.offset(cell, -1, 0).is_none() {
        return;
    }

    if try_move(grid, cell, -1, 0, is_empty_or_water, stats) {
        return;
    }

    let dx = random_side(rng);
    try_move(grid, cell, -1, dx, is_empty_or_water, stats);
}

/// Water falls into empty space, otherwise spreads sideways into empty space
pub fn update_water(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if try_move(grid, cell, -1, 0, is_empty, stats) {
        return;
    }

    let dx = random_side(rng);
    try_move(grid, cell, 0, dx, is_empty, stats);
}

/// Oil moves like water but also trades places with water it touches, so it
/// ends up floating on top
pub fn update_oil(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if try_move(grid, cell, -1, 0, is_empty_or_water, stats) {
        return;
    }

    let dx = random_side(rng);
    try_move(grid, cell, 0, dx, is_empty_or_water, stats);
}

/// Acid eats metal directly above it; otherwise it attempts a single move in a
/// randomly drawn direction (down, left or right) with no fallback.
///
/// The direction is drawn before the metal check, and the dissolve takes
/// priority whatever direction came up.
pub fn update_acid(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    let direction = rng.gen_index(3);

    if let Some(above) = grid.offset(cell, 1, 0)
        && grid.at(above) == ParticleKind::Metal
    {
        grid.put(above, ParticleKind::Empty);
        stats.record_dissolve();
        return;
    }

    let (d_row, d_col) = match direction {
        0 => (-1, 0),
        1 => (0, -1),
        _ => (0, 1),
    };
    try_move(grid, cell, d_row, d_col, is_empty, stats);
}

/// Fire either burns out or acts on one random orthogonal neighbor: sand
/// becomes glass, water becomes steam, empty space lets the fire spread.
/// Fire never moves into a cell it transformed.
pub fn update_fire(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if rng.check_probability(FIRE_BURNOUT_CHANCE) {
        grid.put(cell, ParticleKind::Empty);
        stats.record_dissipated();
        return;
    }

    // 0: up, 1: left, 2: right, 3: down
    let (d_row, d_col) = match rng.gen_index(4) {
        0 => (1, 0),
        1 => (0, -1),
        2 => (0, 1),
        _ => (-1, 0),
    };
    let Some(target) = grid.offset(cell, d_row, d_col) else {
        return;
    };

    match grid.at(target) {
        ParticleKind::Sand => {
            grid.put(target, ParticleKind::Glass);
            stats.record_state_change();
        }
        ParticleKind::Water => {
            grid.put(target, ParticleKind::Steam);
            stats.record_state_change();
        }
        ParticleKind::Empty => {
            grid.exchange(cell, target);
            stats.record_particle_moved();
        }
        _ => {}
    }
}

/// Steam rises into empty space; when blocked it may dissipate
pub fn update_steam(
    grid: &mut Grid,
    cell: Cell,
    rng: &mut dyn SimRng,
    stats: &mut dyn SimStats,
) {
    if try_move(grid, cell, 1, 0, is_empty, stats) {
        return;
    }

    if rng.check_probability(STEAM_DISSIPATE_CHANCE) {
        grid.put(cell, ParticleKind::Empty);
        stats.record_dissipated();
    }
}
