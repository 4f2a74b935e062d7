//! Grid engine - owns the grid and drives the rule table
//!
//! `step_once` is the only mutation entry point driven by time: it samples a
//! cell uniformly and hands it to [`Simulation::apply_rule_at`]'s internal
//! counterpart. Painting goes through `set_cell` or the tools module.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::GridResult;
use crate::grid::Grid;
use crate::particle::ParticleKind;
use crate::rng_trait::SimRng;
use crate::rules;
use crate::stats::StepCounters;

/// Falling-sand simulation over a fixed grid
pub struct Simulation<R: SimRng = Xoshiro256StarStar> {
    grid: Grid,
    rng: R,
    counters: StepCounters,
}

impl Simulation<Xoshiro256StarStar> {
    /// Create a simulation with a reproducible seeded generator
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> GridResult<Self> {
        log::debug!("Seeding simulation RNG with {}", seed);
        Self::new(rows, cols, Xoshiro256StarStar::seed_from_u64(seed))
    }
}

impl<R: SimRng> Simulation<R> {
    /// Create a simulation with every cell Empty
    pub fn new(rows: usize, cols: usize, rng: R) -> GridResult<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            rng,
            counters: StepCounters::default(),
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Read-only view for display layers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for paint tools
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn get_cell(&self, row: i64, col: i64) -> GridResult<ParticleKind> {
        self.grid.get(row, col)
    }

    pub fn set_cell(&mut self, row: i64, col: i64, kind: ParticleKind) -> GridResult<()> {
        self.grid.set(row, col, kind)
    }

    pub fn swap(&mut self, row1: i64, col1: i64, row2: i64, col2: i64) -> GridResult<()> {
        self.grid.swap(row1, col1, row2, col2)
    }

    /// Pick one cell uniformly at random and apply its rule
    pub fn step_once(&mut self) {
        let row = self.rng.gen_index(self.grid.rows());
        let col = self.rng.gen_index(self.grid.cols());
        rules::apply_rule(&mut self.grid, (row, col), &mut self.rng, &mut self.counters);
    }

    /// Run `steps` consecutive [`Simulation::step_once`] calls
    pub fn step_many(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step_once();
        }
    }

    /// Apply the rule of the cell at `(row, col)` without sampling
    pub fn apply_rule_at(&mut self, row: i64, col: i64) -> GridResult<()> {
        // Validates the coordinate before any rule sees it
        self.grid.get(row, col)?;
        let cell = (row as usize, col as usize);
        rules::apply_rule(&mut self.grid, cell, &mut self.rng, &mut self.counters);
        Ok(())
    }

    /// Rule outcomes since creation or the last [`Simulation::take_counters`]
    pub fn counters(&self) -> &StepCounters {
        &self.counters
    }

    /// Return the counters and start a fresh tally
    pub fn take_counters(&mut self) -> StepCounters {
        std::mem::take(&mut self.counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;
    use crate::rng_trait::ScriptedRng;

    #[test]
    fn test_new_simulation_is_empty() {
        let sim = Simulation::seeded(6, 4, 1).unwrap();
        assert_eq!(sim.rows(), 6);
        assert_eq!(sim.cols(), 4);
        assert_eq!(sim.grid().count(ParticleKind::Empty), 24);
    }

    #[test]
    fn test_zero_sized_simulation_rejected() {
        assert!(matches!(
            Simulation::seeded(0, 4, 1),
            Err(GridError::EmptyDimensions { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn test_step_once_samples_row_then_col() {
        let rng = ScriptedRng::new().with_indices(&[2, 1]);
        let mut sim = Simulation::new(3, 3, rng).unwrap();
        sim.set_cell(2, 1, ParticleKind::Sand).unwrap();

        sim.step_once();

        assert_eq!(sim.get_cell(2, 1), Ok(ParticleKind::Empty));
        assert_eq!(sim.get_cell(1, 1), Ok(ParticleKind::Sand));
        assert_eq!(sim.counters().moved, 1);
    }

    #[test]
    fn test_step_once_on_passive_cell_changes_nothing() {
        let rng = ScriptedRng::new().with_indices(&[0, 0]);
        let mut sim = Simulation::new(2, 2, rng).unwrap();
        sim.set_cell(0, 0, ParticleKind::Metal).unwrap();
        let before = sim.grid().clone();

        sim.step_once();

        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_apply_rule_at_validates_coordinates() {
        let mut sim = Simulation::seeded(2, 2, 9).unwrap();
        assert_eq!(
            sim.apply_rule_at(2, 0),
            Err(GridError::InvalidCoordinate {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            })
        );
        assert!(sim.apply_rule_at(-1, 0).is_err());
    }

    #[test]
    fn test_apply_rule_at_steam_rises() {
        let mut sim = Simulation::new(3, 1, ScriptedRng::new()).unwrap();
        sim.set_cell(0, 0, ParticleKind::Steam).unwrap();

        sim.apply_rule_at(0, 0).unwrap();

        assert_eq!(sim.get_cell(0, 0), Ok(ParticleKind::Empty));
        assert_eq!(sim.get_cell(1, 0), Ok(ParticleKind::Steam));
    }

    #[test]
    fn test_take_counters_resets() {
        let mut sim = Simulation::new(2, 1, ScriptedRng::new()).unwrap();
        sim.set_cell(1, 0, ParticleKind::Water).unwrap();
        sim.apply_rule_at(1, 0).unwrap();

        let taken = sim.take_counters();
        assert_eq!(taken.moved, 1);
        assert_eq!(sim.counters().total(), 0);
    }
}
