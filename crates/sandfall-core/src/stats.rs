//! Simulation statistics collection trait

use std::ops::AddAssign;

/// Trait for collecting statistics while rules fire
pub trait SimStats {
    /// Record that a particle swapped into a neighboring cell
    fn record_particle_moved(&mut self);

    /// Record that a neighbor changed phase (sand to glass, water to steam)
    fn record_state_change(&mut self);

    /// Record that acid dissolved a metal cell
    fn record_dissolve(&mut self);

    /// Record that fire burned out or steam dissipated
    fn record_dissipated(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_particle_moved(&mut self) {}
    fn record_state_change(&mut self) {}
    fn record_dissolve(&mut self) {}
    fn record_dissipated(&mut self) {}
}

/// Running totals of rule outcomes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub moved: u64,
    pub state_changes: u64,
    pub dissolved: u64,
    pub dissipated: u64,
}

impl StepCounters {
    /// Total number of cells changed
    pub fn total(&self) -> u64 {
        self.moved + self.state_changes + self.dissolved + self.dissipated
    }
}

impl AddAssign for StepCounters {
    fn add_assign(&mut self, other: Self) {
        self.moved += other.moved;
        self.state_changes += other.state_changes;
        self.dissolved += other.dissolved;
        self.dissipated += other.dissipated;
    }
}

impl SimStats for StepCounters {
    fn record_particle_moved(&mut self) {
        self.moved += 1;
    }

    fn record_state_change(&mut self) {
        self.state_changes += 1;
    }

    fn record_dissolve(&mut self) {
        self.dissolved += 1;
    }

    fn record_dissipated(&mut self) {
        self.dissipated += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats;

        for _ in 0..100 {
            stats.record_particle_moved();
            stats.record_state_change();
            stats.record_dissolve();
            stats.record_dissipated();
        }
    }

    #[test]
    fn test_step_counters() {
        let mut stats = StepCounters::default();

        stats.record_particle_moved();
        stats.record_particle_moved();
        stats.record_state_change();
        stats.record_dissolve();
        stats.record_dissipated();
        stats.record_dissipated();
        stats.record_dissipated();

        assert_eq!(stats.moved, 2);
        assert_eq!(stats.state_changes, 1);
        assert_eq!(stats.dissolved, 1);
        assert_eq!(stats.dissipated, 3);
        assert_eq!(stats.total(), 7);
    }

    #[test]
    fn test_step_counters_add_assign() {
        let mut totals = StepCounters {
            moved: 1,
            state_changes: 2,
            dissolved: 3,
            dissipated: 4,
        };
        totals += StepCounters {
            moved: 10,
            state_changes: 0,
            dissolved: 1,
            dissipated: 5,
        };

        assert_eq!(
            totals,
            StepCounters {
                moved: 11,
                state_changes: 2,
                dissolved: 4,
                dissipated: 9,
            }
        );
        assert_eq!(totals.total(), 26);
    }
}
