//! Dense particle grid
//!
//! Cells are stored row-major in a single `Vec`. Row 0 is the bottom of the
//! world; displays flip rows when mapping to screen Y.

use crate::error::{GridError, GridResult};
use crate::particle::ParticleKind;

/// In-bounds `(row, col)` position
pub type Cell = (usize, usize);

/// Fixed-size 2D grid of particle kinds
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<ParticleKind>,
}

impl Grid {
    /// Create a grid with every cell Empty
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }

        let too_large = GridError::TooLarge { rows, cols };
        let len = rows.checked_mul(cols).ok_or(too_large)?;

        // Coordinates are i64 on the public API
        if i64::try_from(rows).is_err() || i64::try_from(cols).is_err() {
            return Err(too_large);
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, ParticleKind::Empty);

        log::debug!("Creating {}x{} grid", rows, cols);

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid
    pub fn contains(&self, row: i64, col: i64) -> bool {
        usize::try_from(row).is_ok_and(|r| r < self.rows)
            && usize::try_from(col).is_ok_and(|c| c < self.cols)
    }

    /// Get the kind at a caller-supplied coordinate
    pub fn get(&self, row: i64, col: i64) -> GridResult<ParticleKind> {
        let idx = self.checked_index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Overwrite the kind at a caller-supplied coordinate
    pub fn set(&mut self, row: i64, col: i64, kind: ParticleKind) -> GridResult<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = kind;
        Ok(())
    }

    /// Exchange the kinds of two cells. Both coordinates are validated before
    /// anything is written.
    pub fn swap(&mut self, row1: i64, col1: i64, row2: i64, col2: i64) -> GridResult<()> {
        let a = self.checked_index(row1, col1)?;
        let b = self.checked_index(row2, col2)?;
        self.cells.swap(a, b);
        Ok(())
    }

    /// Number of cells currently holding `kind`
    pub fn count(&self, kind: ParticleKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Population of every kind, indexed by [`ParticleKind::index`]
    pub fn histogram(&self) -> [usize; ParticleKind::COUNT] {
        let mut counts = [0; ParticleKind::COUNT];
        for kind in &self.cells {
            counts[kind.index()] += 1;
        }
        counts
    }

    /// Cells of one row, left to right, or `None` past the top row
    pub fn row(&self, row: usize) -> Option<&[ParticleKind]> {
        self.cells.chunks_exact(self.cols).nth(row)
    }

    /// All cells in row-major order, bottom row first
    pub fn cells(&self) -> &[ParticleKind] {
        &self.cells
    }

    fn checked_index(&self, row: i64, col: i64) -> GridResult<usize> {
        if self.contains(row, col) {
            Ok(row as usize * self.cols + col as usize)
        } else {
            Err(GridError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    // Pre-validated access for the rule engine. Callers obtain coordinates from
    // sampling or `offset`, so these index without producing errors.

    /// Neighbor of `cell` shifted by `(d_row, d_col)`, or `None` past an edge
    pub(crate) fn offset(&self, cell: Cell, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = cell.0.checked_add_signed(d_row)?;
        let col = cell.1.checked_add_signed(d_col)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    pub(crate) fn at(&self, (row, col): Cell) -> ParticleKind {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn put(&mut self, (row, col): Cell, kind: ParticleKind) {
        self.cells[row * self.cols + col] = kind;
    }

    pub(crate) fn exchange(&mut self, a: Cell, b: Cell) {
        self.cells.swap(a.0 * self.cols + a.1, b.0 * self.cols + b.1);
    }
}
