//! Luminance and brightness-to-character mapping.

use super::charset::GlyphRamp;

/// ITU-R BT.601 luma coefficients.
pub const LUMA_R: f32 = 0.299;
pub const LUMA_G: f32 = 0.587;
pub const LUMA_B: f32 = 0.114;

/// Perceptual luminance of an RGB sample, in `[0, 255]`.
///
/// The formula is: Y = 0.299*R + 0.587*G + 0.114*B
#[inline]
pub fn luminance(rgb: [f32; 3]) -> f32 {
    (LUMA_R * rgb[0] + LUMA_G * rgb[1] + LUMA_B * rgb[2]).clamp(0.0, 255.0)
}

/// Ramp index for a luminance value with `levels` glyphs.
///
/// `floor(L / 255 * (levels - 1))`, clamped to `[0, levels - 1]`, so that
/// L = 0 selects the first glyph and L = 255 selects the last.
#[inline]
pub fn glyph_index(luminance: f32, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    let max = levels - 1;
    let idx = (luminance / 255.0 * max as f32).floor();
    if idx.is_nan() || idx < 0.0 {
        0
    } else {
        (idx as usize).min(max)
    }
}

/// Map one luminance value to a glyph from `ramp`.
#[inline]
pub fn map_to_char(luminance: f32, ramp: &GlyphRamp) -> char {
    let chars = ramp.as_slice();
    chars[glyph_index(luminance, chars.len())]
}

/// Map luminance values to glyphs.
///
/// Lower luminance maps to earlier glyphs (less dense), higher luminance
/// to later glyphs.
///
/// # Example
/// ```ignore
/// let chars = map_to_chars(&[0.0, 127.0, 255.0], &CharSet::Standard.ramp());
/// // chars == [' ', '=', '@']
/// ```
pub fn map_to_chars(luminances: &[f32], ramp: &GlyphRamp) -> Vec<char> {
    luminances.iter().map(|&l| map_to_char(l, ramp)).collect()
}
