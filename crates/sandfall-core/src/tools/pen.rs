//! Pen tool for painting particles

use super::{Tool, paint_disc};
use crate::error::GridResult;
use crate::grid::Grid;
use crate::particle::ParticleKind;

/// Pen tool that paints a specific kind
pub struct PenTool {
    kind: ParticleKind,
}

impl PenTool {
    /// Create a new pen tool for the given kind
    pub fn new(kind: ParticleKind) -> Self {
        Self { kind }
    }
}

impl Tool for PenTool {
    fn name(&self) -> &str {
        "Pen"
    }

    fn apply(&self, grid: &mut Grid, row: i64, col: i64, radius: u32) -> GridResult<()> {
        paint_disc(grid, row, col, radius, self.kind).map(|_| ())
    }
}
