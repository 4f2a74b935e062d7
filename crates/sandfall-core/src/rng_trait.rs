//! RNG trait abstraction for the rule engine
//!
//! Allows the engine to run on:
//! - any `rand::Rng` (thread-local or seeded generators)
//! - scripted sources in tests that need exact outcomes

/// Random number generator used by the simulation
pub trait SimRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate a uniform index in `0..upper`. `upper` must be non-zero.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        rand::Rng::gen_range(self, 0..upper)
    }
}

/// Replays fixed draws so rule tests can pin exact outcomes.
/// Panics when a draw is requested that the script did not provide.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct ScriptedRng {
    bools: std::collections::VecDeque<bool>,
    floats: std::collections::VecDeque<f32>,
    indices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRng {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_bools(mut self, values: &[bool]) -> Self {
        self.bools.extend(values);
        self
    }

    pub(crate) fn with_floats(mut self, values: &[f32]) -> Self {
        self.floats.extend(values);
        self
    }

    pub(crate) fn with_indices(mut self, values: &[usize]) -> Self {
        self.indices.extend(values);
        self
    }

    /// Whether every scripted draw was consumed
    pub(crate) fn is_exhausted(&self) -> bool {
        self.bools.is_empty() && self.floats.is_empty() && self.indices.is_empty()
    }
}

#[cfg(test)]
impl SimRng for ScriptedRng {
    fn gen_bool(&mut self) -> bool {
        self.bools.pop_front().expect("unscripted gen_bool draw")
    }

    fn gen_f32(&mut self) -> f32 {
        self.floats.pop_front().expect("unscripted gen_f32 draw")
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        let value = self.indices.pop_front().expect("unscripted gen_index draw");
        assert!(value < upper, "scripted index {value} out of 0..{upper}");
        value
    }
}
