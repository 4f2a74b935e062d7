//! Eraser tool

use super::{Tool, paint_disc};
use crate::error::GridResult;
use crate::grid::Grid;
use crate::particle::ParticleKind;

/// Eraser tool that paints Empty
pub struct EraseTool;

impl Tool for EraseTool {
    fn name(&self) -> &str {
        "Eraser"
    }

    fn apply(&self, grid: &mut Grid, row: i64, col: i64, radius: u32) -> GridResult<()> {
        paint_disc(grid, row, col, radius, ParticleKind::Empty).map(|_| ())
    }
}
