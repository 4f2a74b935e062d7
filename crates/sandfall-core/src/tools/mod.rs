//! Paint tools for external input layers

mod erase;
mod pen;

pub use erase::EraseTool;
pub use pen::PenTool;

use crate::error::GridResult;
use crate::grid::Grid;
use crate::particle::ParticleKind;

/// Trait for painting tools
pub trait Tool {
    /// Tool display name
    fn name(&self) -> &str;

    /// Apply tool centred on `(row, col)` with the given brush radius
    fn apply(&self, grid: &mut Grid, row: i64, col: i64, radius: u32) -> GridResult<()>;
}

/// Fill a disc of cells with `kind`. Radius 0 paints a single cell.
///
/// The centre must lie inside the grid; cells of the disc that fall past an
/// edge are skipped. Returns the number of cells painted.
pub fn paint_disc(
    grid: &mut Grid,
    center_row: i64,
    center_col: i64,
    radius: u32,
    kind: ParticleKind,
) -> GridResult<usize> {
    grid.set(center_row, center_col, kind)?;

    let r = i64::from(radius);
    let r_squared = i128::from(r) * i128::from(r);
    // Grid dimensions fit in i64, so the last row and column do too
    let last_row = i64::try_from(grid.rows() - 1).unwrap_or(i64::MAX);
    let last_col = i64::try_from(grid.cols() - 1).unwrap_or(i64::MAX);
    let mut painted = 1;

    // Only visit offsets that stay inside the grid
    for dy in (-r).max(-center_row)..=r.min(last_row - center_row) {
        for dx in (-r).max(-center_col)..=r.min(last_col - center_col) {
            let distance = i128::from(dx) * i128::from(dx) + i128::from(dy) * i128::from(dy);
            if (dx != 0 || dy != 0) && distance <= r_squared {
                grid.set(center_row + dy, center_col + dx, kind)?;
                painted += 1;
            }
        }
    }

    Ok(painted)
}

/// Build the tool for a palette name: "Empty" (and anything unrecognized)
/// erases, every other name paints its kind.
pub fn tool_for_name(name: &str) -> Box<dyn Tool> {
    match ParticleKind::from_tool_name(name) {
        ParticleKind::Empty => Box::new(EraseTool),
        kind => Box::new(PenTool::new(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    #[test]
    fn test_radius_zero_paints_one_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(paint_disc(&mut grid, 2, 2, 0, ParticleKind::Sand), Ok(1));
        assert_eq!(grid.count(ParticleKind::Sand), 1);
        assert_eq!(grid.get(2, 2), Ok(ParticleKind::Sand));
    }

    #[test]
    fn test_disc_shape() {
        let mut grid = Grid::new(5, 5).unwrap();
        assert_eq!(paint_disc(&mut grid, 2, 2, 1, ParticleKind::Metal), Ok(5));
        assert_eq!(grid.get(1, 2), Ok(ParticleKind::Metal));
        assert_eq!(grid.get(2, 3), Ok(ParticleKind::Metal));
        // Corners lie outside a radius-1 disc
        assert_eq!(grid.get(1, 1), Ok(ParticleKind::Empty));
    }

    #[test]
    fn test_disc_clipped_at_corner() {
        let mut grid = Grid::new(4, 4).unwrap();
        let painted = paint_disc(&mut grid, 0, 0, 2, ParticleKind::Water).unwrap();
        assert_eq!(painted, grid.count(ParticleKind::Water));
        // (0,0) (0,1) (0,2) (1,0) (1,1) (2,0)
        assert_eq!(painted, 6);
    }

    #[test]
    fn test_huge_radius_covers_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert_eq!(paint_disc(&mut grid, 1, 1, u32::MAX, ParticleKind::Sand), Ok(16));
        assert_eq!(grid.count(ParticleKind::Sand), 16);

        let mut grid = Grid::new(3, 5).unwrap();
        assert_eq!(paint_disc(&mut grid, 2, 4, 1_000_000, ParticleKind::Oil), Ok(15));
    }

    #[test]
    fn test_center_outside_grid_paints_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        let result = paint_disc(&mut grid, 3, 1, 2, ParticleKind::Sand);
        assert_eq!(
            result,
            Err(GridError::InvalidCoordinate {
                row: 3,
                col: 1,
                rows: 3,
                cols: 3
            })
        );
        assert_eq!(grid.count(ParticleKind::Empty), 9);
    }

    #[test]
    fn test_tool_for_name() {
        assert_eq!(tool_for_name("Sand").name(), "Pen");
        assert_eq!(tool_for_name("Empty").name(), "Eraser");
        assert_eq!(tool_for_name("Plasma").name(), "Eraser");

        let mut grid = Grid::new(2, 2).unwrap();
        tool_for_name("Acid").apply(&mut grid, 1, 1, 0).unwrap();
        assert_eq!(grid.get(1, 1), Ok(ParticleKind::Acid));
    }
}
