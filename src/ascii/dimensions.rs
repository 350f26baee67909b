//! Output size helpers that compensate for tall terminal glyphs.
//!
//! These are caller-side conveniences. Conversion itself accepts any
//! width and height of at least 1.

/// Default glyph aspect ratio (height / width).
/// Monospace glyphs are typically ~2x taller than wide.
pub const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Smallest size the automatic helpers produce along either axis.
pub const MIN_AUTO_CELLS: u32 = 10;

/// Size the output as a percentage of the source resolution.
///
/// Width is `percent`% of the source width; height is `percent`% of the
/// source height divided by the glyph aspect ratio. Both are at least
/// [`MIN_AUTO_CELLS`].
///
/// # Example
/// ```ignore
/// // A 640x480 image at 25% becomes 160x60 cells
/// assert_eq!(scale_by_percent(640, 480, 25.0), (160, 60));
/// ```
pub fn scale_by_percent(img_width: u32, img_height: u32, percent: f32) -> (u32, u32) {
    scale_by_percent_with_aspect(img_width, img_height, percent, DEFAULT_CHAR_ASPECT_RATIO)
}

/// [`scale_by_percent`] with a custom glyph aspect ratio.
pub fn scale_by_percent_with_aspect(
    img_width: u32,
    img_height: u32,
    percent: f32,
    char_aspect: f32,
) -> (u32, u32) {
    let factor = (percent / 100.0).max(0.0);
    let char_aspect = sanitize_aspect(char_aspect);
    let width = (img_width as f32 * factor).round() as u32;
    let height = (img_height as f32 * factor / char_aspect).round() as u32;
    (width.max(MIN_AUTO_CELLS), height.max(MIN_AUTO_CELLS))
}

/// Height that keeps the source aspect ratio for a given output width.
///
/// Returns at least [`MIN_AUTO_CELLS`]. A degenerate source yields the
/// minimum.
pub fn fit_width(img_width: u32, img_height: u32, char_width: u32) -> u32 {
    fit_width_with_aspect(img_width, img_height, char_width, DEFAULT_CHAR_ASPECT_RATIO)
}

/// [`fit_width`] with a custom glyph aspect ratio.
pub fn fit_width_with_aspect(
    img_width: u32,
    img_height: u32,
    char_width: u32,
    char_aspect: f32,
) -> u32 {
    if img_width == 0 || img_height == 0 {
        return MIN_AUTO_CELLS;
    }
    let img_aspect = img_width as f32 / img_height as f32;
    let height = (char_width as f32 / img_aspect / sanitize_aspect(char_aspect)).round() as u32;
    height.max(MIN_AUTO_CELLS)
}

/// Calculate output dimensions that fit within a box and preserve the
/// source aspect ratio once rendered with tall glyphs.
///
/// Tries to use the full width first, then falls back to the full height.
///
/// # Returns
/// `(char_width, char_height)`, or `(0, 0)` for degenerate input.
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_char_width: u32,
    max_char_height: u32,
) -> (u32, u32) {
    if img_width == 0 || img_height == 0 || max_char_width == 0 || max_char_height == 0 {
        return (0, 0);
    }

    // For a 1:1 image we want char_height = char_width / aspect
    let target_char_aspect = img_width as f32 / img_height as f32 * DEFAULT_CHAR_ASPECT_RATIO;

    let char_width = max_char_width;
    let char_height = (char_width as f32 / target_char_aspect).round() as u32;

    if char_height <= max_char_height && char_height > 0 {
        (char_width, char_height)
    } else {
        let char_height = max_char_height;
        let char_width = (char_height as f32 * target_char_aspect).round() as u32;
        (char_width.clamp(1, max_char_width), char_height.max(1))
    }
}

fn sanitize_aspect(char_aspect: f32) -> f32 {
    if char_aspect.is_finite() && char_aspect > 0.0 {
        char_aspect
    } else {
        DEFAULT_CHAR_ASPECT_RATIO
    }
}
