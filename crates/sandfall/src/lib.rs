//! # Sandfall - headless falling-sand driver
//!
//! Runs the Sandfall grid engine without a window: paint strokes come from a
//! RON script, the speed control picks how many steps run per frame, and
//! frames are written out as PNG snapshots.

pub mod app;
pub mod config;
pub mod render;
pub mod script;

pub use app::{App, RunSummary};
pub use config::SandfallConfig;
pub use script::{PaintScript, Stroke};
