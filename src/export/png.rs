//! Raster export: draws the glyph grid into an RGBA image.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings};
use image::{ImageFormat, Rgba, RgbaImage};

use super::{ExportError, ExportOptions, Result};
use crate::ascii::{ConversionResult, Rgb};

/// Margin around the text block, in pixels.
pub const PADDING: u32 = 20;

/// Coverage bitmap of one rasterized glyph.
#[derive(Debug, Clone, Default)]
pub struct GlyphBitmap {
    /// Offset from the pen position to the bitmap's left edge.
    pub xmin: i32,
    /// Offset from the baseline to the bitmap's bottom edge (up is positive).
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, 0..=255.
    pub coverage: Vec<u8>,
}

/// Source of glyph shapes for the raster exporter.
pub trait GlyphRasterizer {
    /// Horizontal advance of one cell at `px` pixels.
    fn advance(&self, px: f32) -> f32;
    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap;
}

impl GlyphRasterizer for Font {
    fn advance(&self, px: f32) -> f32 {
        // Monospace: every glyph shares the advance of 'M'
        self.metrics('M', px).advance_width
    }

    fn rasterize(&self, ch: char, px: f32) -> GlyphBitmap {
        let (metrics, coverage) = Font::rasterize(self, ch, px);
        GlyphBitmap {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}

/// Load a TrueType/OpenType font from disk.
pub fn load_font(path: &Path) -> Result<Font> {
    let data = std::fs::read(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Font::from_bytes(data, FontSettings::default()).map_err(|e| ExportError::Font {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Draw `result` onto a new image.
///
/// Cells with a color use it for the glyph (and fill their background in
/// full-rgb mode); other cells use `options.foreground`.
pub fn render_png<R: GlyphRasterizer>(
    result: &ConversionResult,
    options: &ExportOptions,
    rasterizer: &R,
) -> RgbaImage {
    let px = options.font_size.max(1.0);
    let advance = rasterizer.advance(px).max(1.0);
    let row_height = (px * options.line_height).max(1.0);

    let lines: Vec<&str> = result.lines().collect();
    let max_cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let width = (max_cols as f32 * advance).ceil() as u32 + 2 * PADDING;
    let height = (lines.len() as f32 * row_height).ceil() as u32 + 2 * PADDING;

    let Rgb { r, g, b } = options.background;
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]));
    let mut cache: HashMap<char, GlyphBitmap> = HashMap::new();

    for (y, line) in lines.iter().enumerate() {
        let baseline = PADDING as f32 + (y + 1) as f32 * row_height;
        for (x, ch) in line.chars().enumerate() {
            let left = PADDING as f32 + x as f32 * advance;
            let cell = result.color_at(x, y);

            if let Some(bg) = cell.and_then(|c| c.background()) {
                fill_rect(
                    &mut canvas,
                    left,
                    baseline - row_height,
                    advance,
                    row_height,
                    Rgb::new(bg.r, bg.g, bg.b),
                    bg.a,
                );
            }

            let fg = cell.map_or(options.foreground, |c| c.foreground());
            let glyph = cache
                .entry(ch)
                .or_insert_with(|| rasterizer.rasterize(ch, px));
            draw_glyph(&mut canvas, glyph, left, baseline, fg);
        }
    }

    canvas
}

/// Render and save as PNG.
pub fn write_png<R: GlyphRasterizer>(
    result: &ConversionResult,
    options: &ExportOptions,
    rasterizer: &R,
    path: &Path,
) -> Result<()> {
    let canvas = render_png(result, options, rasterizer);
    canvas.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn fill_rect(canvas: &mut RgbaImage, x: f32, y: f32, w: f32, h: f32, color: Rgb, alpha: f32) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + w).ceil() as u32).min(canvas.width());
    let y1 = ((y + h).ceil() as u32).min(canvas.height());
    for py in y0..y1 {
        for px in x0..x1 {
            blend(canvas.get_pixel_mut(px, py), color, alpha);
        }
    }
}

fn draw_glyph(canvas: &mut RgbaImage, glyph: &GlyphBitmap, pen_x: f32, baseline: f32, color: Rgb) {
    let origin_x = pen_x.round() as i64 + glyph.xmin as i64;
    let origin_y = baseline.round() as i64 - glyph.height as i64 - glyph.ymin as i64;
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            let coverage = glyph.coverage[gy * glyph.width + gx];
            if coverage == 0 {
                continue;
            }
            let tx = origin_x + gx as i64;
            let ty = origin_y + gy as i64;
            if tx < 0 || ty < 0 || tx >= canvas.width() as i64 || ty >= canvas.height() as i64 {
                continue;
            }
            blend(
                canvas.get_pixel_mut(tx as u32, ty as u32),
                color,
                coverage as f32 / 255.0,
            );
        }
    }
}

fn blend(pixel: &mut Rgba<u8>, color: Rgb, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |dst: u8, src: u8| (dst as f32 * (1.0 - alpha) + src as f32 * alpha).round() as u8;
    let [r, g, b, a] = pixel.0;
    *pixel = Rgba([mix(r, color.r), mix(g, color.g), mix(b, color.b), a]);
}
