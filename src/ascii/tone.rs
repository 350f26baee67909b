//! Brightness and contrast adjustment.

/// Multiplicative brightness and contrast around mid-gray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

impl Tone {
    pub fn new(brightness: f32, contrast: f32) -> Self {
        Self {
            brightness,
            contrast,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 1.0 && self.contrast == 1.0
    }

    /// Adjust a single channel value.
    ///
    /// Contrast scales the deviation from 127.5, then brightness scales the
    /// result. The output is clamped to `[0, 255]` but not rounded.
    #[inline]
    pub fn adjust(&self, value: u8) -> f32 {
        let centered = (value as f32 / 255.0 - 0.5) * self.contrast + 0.5;
        (centered * 255.0 * self.brightness).clamp(0.0, 255.0)
    }

    /// Adjust the R, G and B channels of a sample.
    #[inline]
    pub fn adjust_rgb(&self, rgb: [u8; 3]) -> [f32; 3] {
        [self.adjust(rgb[0]), self.adjust(rgb[1]), self.adjust(rgb[2])]
    }
}
