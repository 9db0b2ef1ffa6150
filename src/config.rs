//! Render configuration
//!
//! Defaults reproduce the reference run: the whole set in a 2x2 box around
//! (-0.5, 0), 255 iterations, 1024x1024 pixels, written to `mandelbrot.jpg`.

use crate::fractal::ViewWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;
pub const DEFAULT_PIXELS_WIDE: u32 = 512 * 2;
pub const DEFAULT_OUTPUT: &str = "mandelbrot.jpg";

/// Largest image edge any supported codec will encode (JPEG caps at 65535)
pub const MAX_PIXELS_WIDE: u32 = u16::MAX as u32;

/// Everything needed for one render, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub view: ViewWindow,
    pub max_iterations: u32,
    pub pixels_wide: u32,
    /// Escape bound for the orbit test. When unset the view size is used,
    /// which is what the reference renderer does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_radius: Option<f64>,
    pub output: PathBuf,
}

impl RenderConfig {
    /// Bound passed to the escape-time evaluator
    pub fn escape_bound(&self) -> f64 {
        self.escape_radius.unwrap_or(self.view.size)
    }

    /// Reject degenerate configurations before any rendering happens
    pub fn validate(&self) -> Result<(), String> {
        if !self.view.center_x.is_finite() || !self.view.center_y.is_finite() {
            return Err(format!(
                "center must be finite, got ({}, {})",
                self.view.center_x, self.view.center_y
            ));
        }
        if !self.view.size.is_finite() || self.view.size <= 0.0 {
            return Err(format!(
                "size must be a positive number, got {}",
                self.view.size
            ));
        }
        if self.pixels_wide == 0 {
            return Err("pixels wide must be at least 1".to_string());
        }
        if self.pixels_wide > MAX_PIXELS_WIDE {
            return Err(format!(
                "pixels wide must be at most {}, got {}",
                MAX_PIXELS_WIDE, self.pixels_wide
            ));
        }
        if let Some(radius) = self.escape_radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(format!(
                    "escape radius must be a positive number, got {}",
                    radius
                ));
            }
        }
        if self.output.as_os_str().is_empty() {
            return Err("output path must not be empty".to_string());
        }
        Ok(())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| e.to_string())
    }

    /// Load config from a JSON file; missing fields take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            view: ViewWindow::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            pixels_wide: DEFAULT_PIXELS_WIDE,
            escape_radius: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
