use super::{escape_time, ViewWindow};
use crate::config::RenderConfig;
use crate::raster::GrayBuffer;

/// Brightness for a pixel whose orbit escaped after `iterations`.
///
/// Never-escaping points (iterations == max) are black; points that escape
/// immediately are brightest. Budgets above 255 saturate at white instead of
/// wrapping when narrowed to a byte.
#[inline]
pub fn gray_level(max_iterations: u32, iterations: u32) -> u8 {
    max_iterations
        .saturating_sub(iterations)
        .min(u8::MAX as u32) as u8
}

/// Render the configured view into a `pixels_wide` x `pixels_wide` buffer
pub fn render_grayscale(config: &RenderConfig) -> GrayBuffer {
    render_grayscale_with(
        &config.view,
        config.escape_bound(),
        config.max_iterations,
        config.pixels_wide,
    )
}

/// Shade every pixel of a square grid by escape time, row by row.
///
/// Cells are independent; each is written exactly once.
pub fn render_grayscale_with(
    view: &ViewWindow,
    escape_bound: f64,
    max_iterations: u32,
    pixels_wide: u32,
) -> GrayBuffer {
    let mut buffer = GrayBuffer::square(pixels_wide);

    for y in 0..pixels_wide {
        for x in 0..pixels_wide {
            let z0 = view.point_at(x, y, pixels_wide);
            let iterations = escape_time(z0, escape_bound, max_iterations);
            buffer.set(x, y, gray_level(max_iterations, iterations));
        }
    }

    buffer
}
