//! Grid state and particle transition rules for Sandfall
//!
//! This crate provides the falling-sand engine:
//! - Particle kinds and their display colors (ParticleKind)
//! - The dense grid and its bounds-checked accessors (Grid, GridError)
//! - The per-kind rule table and the stepping driver (rules, Simulation)
//! - Injected randomness and rule statistics (SimRng, SimStats)
//! - Paint tools and the speed control mapping (tools, speed)

pub mod error;
pub mod grid;
pub mod particle;
pub mod rng_trait;
pub mod rules;
pub mod simulation;
pub mod speed;
pub mod stats;
pub mod tools;

pub use error::{GridError, GridResult};
pub use grid::{Cell, Grid};
pub use particle::{ParticleKind, TOOL_NAMES};
pub use rng_trait::SimRng;
pub use simulation::Simulation;
pub use speed::{DEFAULT_SPEED_CONTROL, MAX_SPEED_CONTROL, steps_per_frame};
pub use stats::{NoopStats, SimStats, StepCounters};
pub use tools::{EraseTool, PenTool, Tool, paint_disc, tool_for_name};
