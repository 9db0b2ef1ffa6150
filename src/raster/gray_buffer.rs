// ============================================================================
// Interleaved Offsets
// ============================================================================

/// Channel count of a grayscale (luma only) sample buffer
pub const GRAY_CHANNELS: usize = 1;

/// Flat offset of `channel` for pixel (x, y) in a row-major buffer of
/// `CHANNELS` interleaved samples per pixel.
///
/// Computed in `usize` so a 65536-wide RGB buffer cannot wrap a `u32`.
#[inline]
pub fn offset_in_interleaved<const CHANNELS: usize>(
    width: u32,
    x: u32,
    y: u32,
    channel: usize,
) -> usize {
    debug_assert!(
        channel < CHANNELS,
        "offset_in_interleaved: channel ({}) must be < {}",
        channel,
        CHANNELS
    );
    (y as usize * width as usize + x as usize) * CHANNELS + channel
}

// ============================================================================
// GrayBuffer
// ============================================================================

/// Single-channel 8-bit sample buffer, row-major.
/// Every renderer writes into one of these before it is handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    samples: Vec<u8>,
    width: u32,
    height: u32,
}

impl GrayBuffer {
    /// Create a zero-filled (black) buffer
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            samples: vec![0; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Create a square zero-filled buffer, `pixels_wide` on each edge
    pub fn square(pixels_wide: u32) -> Self {
        Self::with_size(pixels_wide, pixels_wide)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> u8 {
        GRAY_CHANNELS as u8
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn sample_index(&self, x: u32, y: u32) -> usize {
        offset_in_interleaved::<GRAY_CHANNELS>(self.width, x, y, 0)
    }

    /// Read a sample (bounds checked)
    #[cfg(test)]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if self.in_bounds(x, y) {
            Some(self.samples[self.sample_index(x, y)])
        } else {
            None
        }
    }

    /// Write a sample (bounds checked, out of range writes are dropped)
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if self.in_bounds(x, y) {
            let idx = self.sample_index(x, y);
            self.samples[idx] = value;
        }
    }

    /// Raw samples, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.samples
    }

    #[cfg(test)]
    pub fn into_raw(self) -> Vec<u8> {
        self.samples
    }
}
