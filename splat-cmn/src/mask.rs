use serde::{Deserialize, Serialize};

/// RGBA bytes per pixel in a decoded mask.
pub const MASK_CHANNELS: usize = 4;

/// Per-pixel selection image returned by the segmentation service.
/// Background pixels are all-zero; foreground pixels carry the service's
/// tint color with a non-zero alpha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MaskImage {
    /// `data.len()` must equal [`MaskImage::expected_len`] for the
    /// given dimensions.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), Self::expected_len(width, height));
        Self {
            width,
            height,
            data,
        }
    }

    pub fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * MASK_CHANNELS
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the mask marks `(x, y)` as foreground.
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        let idx = (y as usize * self.width as usize + x as usize) * MASK_CHANNELS;
        self.data[idx + 3] != 0
    }
}
