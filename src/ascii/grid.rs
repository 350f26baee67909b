//! Grid assembly: walks a sampled image in raster order and produces the
//! text, color and markup renderings.

use serde::Serialize;

use super::charset::GlyphRamp;
use super::color::{self, CellColor, ColorMode};
use super::edges::apply_edge_detection;
use super::mapping::{luminance, map_to_char};
use super::resample::{resample, PixelGrid, PixelSource};
use super::tone::Tone;
use crate::error::{ConvertError, Result};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Default output height in characters.
pub const DEFAULT_HEIGHT: u32 = 75;

/// Everything the converter needs to know about a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionParameters {
    pub width: u32,
    pub height: u32,
    pub ramp: GlyphRamp,
    pub inverted: bool,
    pub color_mode: ColorMode,
    pub brightness: f32,
    pub contrast: f32,
    pub edge_detection: bool,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ramp: GlyphRamp::default(),
            inverted: false,
            color_mode: ColorMode::Grayscale,
            brightness: 1.0,
            contrast: 1.0,
            edge_detection: false,
        }
    }
}

impl ConversionParameters {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_ramp(mut self, ramp: GlyphRamp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_edge_detection(mut self, enabled: bool) -> Self {
        self.edge_detection = enabled;
        self
    }

    /// Check dimensions, ramp and tone values.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConvertError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.ramp.is_empty() {
            return Err(ConvertError::EmptyRamp);
        }
        for (name, value) in [("brightness", self.brightness), ("contrast", self.contrast)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConvertError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    pub fn tone(&self) -> Tone {
        Tone::new(self.brightness, self.contrast)
    }

    /// The ramp actually used for mapping, after inversion.
    pub fn effective_ramp(&self) -> GlyphRamp {
        if self.inverted {
            self.ramp.reversed()
        } else {
            self.ramp.clone()
        }
    }
}

/// Output of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub width: u32,
    pub height: u32,
    /// Rows of glyphs, each terminated by `\n`.
    pub text: String,
    /// Per-cell colors, `height` rows of `width` cells. `None` in grayscale mode.
    pub colors: Option<Vec<Vec<Option<CellColor>>>>,
    /// HTML fragment for display. Not meant for parsing.
    pub markup: String,
}

impl ConversionResult {
    /// Text rows without their terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Color at (x, y), if the result carries colors.
    pub fn color_at(&self, x: usize, y: usize) -> Option<CellColor> {
        self.colors.as_ref()?.get(y)?.get(x).copied().flatten()
    }
}

/// Decode, resample and convert `source`.
pub fn convert(source: &PixelSource, params: &ConversionParameters) -> Result<ConversionResult> {
    params.validate()?;
    let grid = resample(source, params.width, params.height)?;
    assemble(&grid, params)
}

/// Convert an in-memory grid. It is resampled first when its size differs
/// from the requested output size.
pub fn convert_grid(grid: &PixelGrid, params: &ConversionParameters) -> Result<ConversionResult> {
    params.validate()?;
    if grid.width() == params.width && grid.height() == params.height {
        return assemble(grid, params);
    }
    let resampled = resample(&PixelSource::Rgba(grid.clone()), params.width, params.height)?;
    assemble(&resampled, params)
}

fn assemble(grid: &PixelGrid, params: &ConversionParameters) -> Result<ConversionResult> {
    let ramp = params.effective_ramp();
    if ramp.is_empty() {
        return Err(ConvertError::EmptyRamp);
    }

    let filtered;
    let grid = if params.edge_detection {
        filtered = apply_edge_detection(grid);
        &filtered
    } else {
        grid
    };

    let (width, height) = (grid.width(), grid.height());
    let tone = params.tone();
    let colored = params.color_mode.is_colored();

    log::debug!(
        "Converting {}x{} grid, {} glyphs, mode {}",
        width,
        height,
        ramp.len(),
        params.color_mode.name()
    );

    let cells = width as usize * height as usize;
    let mut text = String::with_capacity(cells + height as usize);
    let mut markup = String::with_capacity(cells * if colored { 40 } else { 1 });
    let mut colors = colored.then(|| Vec::with_capacity(height as usize));

    for y in 0..height {
        let mut row_colors = Vec::with_capacity(if colored { width as usize } else { 0 });
        for x in 0..width {
            let [r, g, b, _] = grid.pixel(x, y);
            let rgb = tone.adjust_rgb([r, g, b]);
            let lum = luminance(rgb);
            let ch = map_to_char(lum, &ramp);
            text.push(ch);

            let cell = color::resolve(params.color_mode, rgb, lum);
            push_markup(&mut markup, ch, cell.as_ref());
            if colored {
                row_colors.push(cell);
            }
        }
        text.push('\n');
        markup.push('\n');
        if let Some(colors) = colors.as_mut() {
            colors.push(row_colors);
        }
    }

    Ok(ConversionResult {
        width,
        height,
        text,
        colors,
        markup,
    })
}

fn push_markup(out: &mut String, ch: char, cell: Option<&CellColor>) {
    match cell {
        Some(cell) => {
            out.push_str("<span style=\"");
            out.push_str(&cell.css_style());
            out.push_str("\">");
            push_escaped(out, ch);
            out.push_str("</span>");
        }
        None => push_escaped(out, ch),
    }
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(ch),
    }
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped(&mut out, ch);
    }
    out
}
