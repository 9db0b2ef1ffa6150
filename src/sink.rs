//! Image sinks
//!
//! A sink takes a flat buffer of interleaved 8-bit samples plus its
//! dimensions and persists it somewhere. The renderer never sees the codec.

use std::env;
use std::path::{Path, PathBuf};

/// Anything that can persist a rectangular buffer of 8-bit samples
pub trait ImageSink {
    /// Persist `samples` (row-major, `channels` interleaved samples per pixel)
    fn write(&mut self, samples: &[u8], width: u32, height: u32, channels: u8)
        -> Result<(), String>;
}

/// Encodes to an image file, codec picked from the file extension
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for FileSink {
    fn write(
        &mut self,
        samples: &[u8],
        width: u32,
        height: u32,
        channels: u8,
    ) -> Result<(), String> {
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                width,
                height,
                channels,
                samples.len()
            ));
        }

        let raw = samples.to_vec();
        let result = match channels {
            1 => image::GrayImage::from_raw(width, height, raw)
                .ok_or_else(|| "sample buffer does not fit image".to_string())?
                .save(&self.path),
            3 => image::RgbImage::from_raw(width, height, raw)
                .ok_or_else(|| "sample buffer does not fit image".to_string())?
                .save(&self.path),
            n => return Err(format!("unsupported channel count: {}", n)),
        };

        result.map_err(|e| format!("{}: {}", self.path.display(), e))
    }
}

/// Absolute location for an output file.
///
/// Relative paths are taken from the current directory. When the parent
/// directory exists it is canonicalized; a missing parent leaves the joined
/// path as is so the sink reports the real failure.
pub fn resolve_output_path(path: &Path) -> Result<PathBuf, String> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(|e| format!("Failed to read current directory: {}", e))?
            .join(path)
    };

    let (Some(parent), Some(file_name)) = (joined.parent(), joined.file_name()) else {
        return Ok(joined);
    };

    match parent.canonicalize() {
        Ok(parent) => Ok(parent.join(file_name)),
        Err(_) => Ok(joined),
    }
}
