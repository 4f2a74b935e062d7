//! Error types for grid access

use thiserror::Error;

/// Errors raised by externally supplied grid coordinates or dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Read or write outside `[0, rows) x [0, cols)`
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// A grid needs at least one row and one column
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },

    /// `rows * cols` cells cannot be addressed or allocated
    #[error("grid dimensions {rows}x{cols} are too large")]
    TooLarge { rows: usize, cols: usize },
}

pub type GridResult<T> = Result<T, GridError>;
