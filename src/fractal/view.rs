use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// Square region of the complex plane, `size` on each edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewWindow {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
}

impl ViewWindow {
    pub fn new(center_x: f64, center_y: f64, size: f64) -> Self {
        Self {
            center_x,
            center_y,
            size,
        }
    }

    /// Complex-plane point sampled by pixel (x, y) of a `pixels_wide` grid
    #[inline]
    pub fn point_at(&self, x: u32, y: u32, pixels_wide: u32) -> Complex<f64> {
        Complex::new(
            scaled_coordinate(self.center_x, self.size, x as f64, pixels_wide),
            scaled_coordinate(self.center_y, self.size, y as f64, pixels_wide),
        )
    }
}

impl Default for ViewWindow {
    /// The whole set: a 2x2 box around (-0.5, 0)
    fn default() -> Self {
        Self::new(-0.5, 0.0, 2.0)
    }
}

/// Map a pixel index along one axis into the view window.
///
/// Pixel 0 lands on `center - size/2`; index `pixels_wide` (one past the last
/// pixel) would land on `center + size/2`, so sampling is half-open.
#[inline]
pub fn scaled_coordinate(center: f64, size: f64, xy: f64, pixels_wide: u32) -> f64 {
    center - size / 2.0 + (size * xy) / pixels_wide as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_edges() {
        assert_eq!(scaled_coordinate(-0.5, 2.0, 0.0, 1024), -1.5);
        assert_eq!(scaled_coordinate(-0.5, 2.0, 1024.0, 1024), 0.5);
        assert_eq!(scaled_coordinate(0.0, 2.0, 512.0, 1024), 0.0);
    }

    #[test]
    fn test_scaled_strictly_increasing() {
        let pixels_wide = 37;
        let mut last = f64::NEG_INFINITY;
        for xy in 0..=pixels_wide {
            let v = scaled_coordinate(0.25, 0.75, xy as f64, pixels_wide);
            assert!(v > last, "not increasing at {}", xy);
            last = v;
        }
    }

    #[test]
    fn test_scaled_is_affine() {
        // Constant step of size / pixels_wide
        let step = 3.0 / 6.0;
        for xy in 0..6 {
            let a = scaled_coordinate(1.0, 3.0, xy as f64, 6);
            let b = scaled_coordinate(1.0, 3.0, (xy + 1) as f64, 6);
            assert!((b - a - step).abs() < 1e-12);
        }
    }

    #[test]
    fn test_point_at_uses_both_axes() {
        let view = ViewWindow::default();
        assert_eq!(view.point_at(0, 0, 4), Complex::new(-1.5, -1.0));
        assert_eq!(view.point_at(2, 2, 4), Complex::new(-0.5, 0.0));
        assert_eq!(view.point_at(3, 1, 4), Complex::new(0.0, -0.5));
    }
}
