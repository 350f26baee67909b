//! Error types for image conversion.

use thiserror::Error;

/// Errors produced while turning a pixel source into a glyph grid.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source bytes are not a valid or supported image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Raw RGBA buffer does not match its declared dimensions.
    #[error("pixel buffer of {len} bytes does not match {width}x{height} RGBA")]
    BufferSize { width: u32, height: u32, len: usize },

    /// Target width or height is below 1.
    #[error("invalid target dimensions {width}x{height} (both must be at least 1)")]
    InvalidDimension { width: u32, height: u32 },

    /// The resolved character ramp has no characters.
    #[error("character ramp is empty")]
    EmptyRamp,

    /// Brightness or contrast is not a positive finite number.
    #[error("invalid {name}: {value} (must be a positive number)")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
