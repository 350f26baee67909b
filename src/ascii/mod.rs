//! Image to glyph grid conversion.
//!
//! The pipeline, applied in this order:
//!
//! 1. **Resampling** - decode the source and scale it to the output grid
//! 2. **Edge boost** - optional Sobel filter that brightens strong edges
//! 3. **Tone mapping** - brightness and contrast per channel
//! 4. **Glyph mapping** - BT.601 luminance to a character from the ramp
//! 5. **Color resolution** - per-cell color for the colored modes
//!
//! [`convert`] runs all of it; the individual stages are exported for
//! callers that need them separately.

mod charset;
mod color;
pub mod dimensions;
mod edges;
mod grid;
mod mapping;
mod resample;
mod tone;

pub use charset::{
    CharSet, GlyphRamp, BINARY_CHARSET, BLOCKS_CHARSET, DETAILED_CHARSET, DOTS_CHARSET,
    STANDARD_CHARSET,
};
pub use color::{
    ansi256_index, ansi256_to_rgb, ansi_level, background_alpha, resolve as resolve_color,
    CellColor, ColorMode, Rgb, Rgba,
};
pub use dimensions::{
    calculate_dimensions, fit_width, scale_by_percent, DEFAULT_CHAR_ASPECT_RATIO,
};
pub use edges::{apply_edge_detection, gradient_magnitude, EDGE_THRESHOLD};
pub use grid::{
    convert, convert_grid, escape_html, ConversionParameters, ConversionResult, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
pub use mapping::{glyph_index, luminance, map_to_char, map_to_chars};
pub use resample::{resample, resample_image, PixelGrid, PixelSource};
pub use tone::Tone;
