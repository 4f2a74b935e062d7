//! CPU rendering of the particle grid

mod pixel_renderer;

pub use pixel_renderer::{PixelRenderer, auto_cell_size};
