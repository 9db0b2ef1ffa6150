//! Escape-time Mandelbrot kernel
//!
//! The evaluator is a leaf; the renderer walks a square pixel grid, maps each
//! pixel into the view window and shades it by how quickly its orbit escapes.

mod escape;
mod render;
mod view;

pub use escape::escape_time;
#[allow(unused_imports)]
pub use render::{gray_level, render_grayscale, render_grayscale_with};
#[allow(unused_imports)]
pub use view::{scaled_coordinate, ViewWindow};
