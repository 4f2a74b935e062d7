//! Paint scripts - scheduled paint strokes standing in for mouse input
//!
//! A script is a RON file:
//!
//! ```ron
//! (
//!     strokes: [
//!         (frame: 0, row: 100, col: 40, tool: "Sand", radius: 3, hold: 120),
//!         (frame: 30, row: 10, col: 40, tool: "Fire"),
//!     ],
//! )
//! ```
//!
//! A stroke repaints its disc at the start of every frame in
//! `frame..frame + hold`, like a mouse button held down in one place.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Ordered collection of paint strokes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintScript {
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

/// One paint action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// First frame the stroke is applied on (0-based)
    pub frame: u64,
    pub row: i64,
    pub col: i64,
    /// Palette tool name; unrecognized names erase
    pub tool: String,
    /// Brush radius (0 paints one cell)
    #[serde(default)]
    pub radius: u32,
    /// Number of consecutive frames the stroke stays down
    #[serde(default = "default_hold")]
    pub hold: u64,
}

fn default_hold() -> u64 {
    1
}

impl Stroke {
    /// Whether this stroke paints during `frame`
    pub fn is_active(&self, frame: u64) -> bool {
        frame >= self.frame && frame - self.frame < self.hold
    }
}

impl PaintScript {
    /// Parse a script from RON text
    pub fn parse(source: &str) -> Result<Self> {
        ron::from_str(source).context("Failed to parse paint script")
    }

    /// Load a script from a RON file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read paint script {}", path.display()))?;
        let script = Self::parse(&source)
            .with_context(|| format!("Invalid paint script {}", path.display()))?;
        log::info!(
            "Loaded {} strokes from {}",
            script.strokes.len(),
            path.display()
        );
        Ok(script)
    }

    /// Strokes painting during `frame`, in script order
    pub fn active_strokes(&self, frame: u64) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(move |s| s.is_active(frame))
    }

    /// Last frame any stroke is still held
    pub fn last_frame(&self) -> Option<u64> {
        self.strokes
            .iter()
            .filter(|s| s.hold > 0)
            .map(|s| s.frame.saturating_add(s.hold - 1))
            .max()
    }
}
