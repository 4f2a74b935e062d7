//! CPU-based pixel buffer renderer for headless snapshots
//!
//! Renders the grid to an RGBA buffer without GPU dependencies.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use sandfall_core::Grid;

/// Target edge length, in pixels, of the longer image side
const TARGET_IMAGE_EDGE: usize = 600;

/// Largest cell size that keeps the image near [`TARGET_IMAGE_EDGE`]
pub fn auto_cell_size(rows: usize, cols: usize) -> usize {
    (TARGET_IMAGE_EDGE / rows.max(cols).max(1)).max(1)
}

/// CPU-based renderer that outputs to a pixel buffer
pub struct PixelRenderer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Edge length of one cell in pixels
    pub cell_size: usize,
    /// RGBA pixel buffer (4 bytes per pixel)
    pub buffer: Vec<u8>,
}

impl PixelRenderer {
    /// Create a renderer sized for a `rows x cols` grid
    pub fn new(rows: usize, cols: usize, cell_size: usize) -> Result<Self> {
        let cell_size = cell_size.max(1);
        let (width, height) = cols
            .checked_mul(cell_size)
            .zip(rows.checked_mul(cell_size))
            .filter(|&(w, h)| u32::try_from(w).is_ok() && u32::try_from(h).is_ok())
            .with_context(|| {
                format!("Image for a {rows}x{cols} grid at {cell_size} px per cell is too large")
            })?;
        let len = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .context("Pixel buffer size overflows")?;

        Ok(Self {
            width,
            height,
            cell_size,
            buffer: vec![0u8; len],
        })
    }

    /// Paint every cell with its kind's color
    pub fn render(&mut self, grid: &Grid) {
        let rows = grid.rows();

        for row in 0..rows {
            let Some(cells) = grid.row(row) else {
                break;
            };
            // Flip Y for screen coordinates (row 0 is the bottom)
            let screen_row = rows - 1 - row;

            for (col, kind) in cells.iter().enumerate() {
                self.fill_cell(screen_row, col, kind.color());
            }
        }
    }

    /// Fill one cell-sized square in screen coordinates
    fn fill_cell(&mut self, screen_row: usize, col: usize, color: [u8; 4]) {
        let x0 = col * self.cell_size;
        let y0 = screen_row * self.cell_size;

        for y in y0..y0 + self.cell_size {
            let start = (y * self.width + x0) * 4;
            let end = start + self.cell_size * 4;
            for pixel in self.buffer[start..end].chunks_exact_mut(4) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    /// Color at pixel `(x, y)`, origin top-left
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut color = [0; 4];
        color.copy_from_slice(&self.buffer[idx..idx + 4]);
        Some(color)
    }

    /// Write the current buffer as a PNG
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let width = u32::try_from(self.width).context("Image width exceeds u32")?;
        let height = u32::try_from(self.height).context("Image height exceeds u32")?;
        let image = RgbaImage::from_raw(width, height, self.buffer.clone())
            .context("Pixel buffer does not match image dimensions")?;

        image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))
    }
}
