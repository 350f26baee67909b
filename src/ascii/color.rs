//! Per-cell color resolution for colored output modes.

use serde::{Deserialize, Serialize};

/// How cells are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// No per-cell color; the renderer picks one foreground.
    #[default]
    Grayscale,
    /// 6x6x6 ANSI cube, palette indices 16..=231.
    #[serde(rename = "ansi")]
    Ansi256,
    /// Foreground color only.
    Rgb,
    /// Foreground color plus a translucent background of the same hue.
    FullRgb,
}

impl ColorMode {
    pub const ALL: [ColorMode; 4] = [
        ColorMode::Grayscale,
        ColorMode::Ansi256,
        ColorMode::Rgb,
        ColorMode::FullRgb,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorMode::Grayscale => "grayscale",
            ColorMode::Ansi256 => "ansi",
            ColorMode::Rgb => "rgb",
            ColorMode::FullRgb => "full-rgb",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether results in this mode carry a color grid.
    pub fn is_colored(&self) -> bool {
        !matches!(self, ColorMode::Grayscale)
    }
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Round and clamp floating-point channels.
    pub fn from_f32(rgb: [f32; 3]) -> Self {
        let c = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        Self::new(c(rgb[0]), c(rgb[1]), c(rgb[2]))
    }

    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// RGB color with fractional opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Color descriptor for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CellColor {
    Rgb {
        foreground: Rgb,
    },
    FullRgb {
        foreground: Rgb,
        background: Rgba,
    },
    /// `index` is the color's identity. `approx` is for display only and
    /// must not be fed back into quantization.
    Ansi256 {
        index: u8,
        approx: Rgb,
    },
}

impl CellColor {
    /// Color used to draw the glyph.
    pub fn foreground(&self) -> Rgb {
        match *self {
            CellColor::Rgb { foreground } | CellColor::FullRgb { foreground, .. } => foreground,
            CellColor::Ansi256 { approx, .. } => approx,
        }
    }

    pub fn background(&self) -> Option<Rgba> {
        match *self {
            CellColor::FullRgb { background, .. } => Some(background),
            _ => None,
        }
    }

    /// Inline CSS declarations for the HTML markup.
    pub fn css_style(&self) -> String {
        match self.background() {
            Some(bg) => format!("color:{};background:{}", self.foreground().to_css(), bg.to_css()),
            None => format!("color:{}", self.foreground().to_css()),
        }
    }
}

/// Share of luminance used as background opacity in full-rgb mode.
pub const BACKGROUND_ALPHA_SCALE: f32 = 0.3;

/// First palette index of the 6x6x6 color cube.
pub const ANSI_CUBE_OFFSET: u8 = 16;

/// Step between cube levels when converting back to RGB.
pub const ANSI_LEVEL_STEP: u8 = 51;

/// Quantize a channel to one of 6 cube levels.
#[inline]
pub fn ansi_level(channel: f32) -> u8 {
    (channel.clamp(0.0, 255.0) / 255.0 * 5.0).round() as u8
}

/// Palette index for an RGB sample: `16 + 36r + 6g + b` over cube levels.
pub fn ansi256_index(rgb: [f32; 3]) -> u8 {
    let (r, g, b) = (ansi_level(rgb[0]), ansi_level(rgb[1]), ansi_level(rgb[2]));
    ANSI_CUBE_OFFSET + 36 * r + 6 * g + b
}

/// Approximate display RGB for a cube palette index (16..=231).
pub fn ansi256_to_rgb(index: u8) -> Rgb {
    let cube = index.saturating_sub(ANSI_CUBE_OFFSET).min(215);
    let (r, g, b) = (cube / 36, (cube / 6) % 6, cube % 6);
    Rgb::new(r * ANSI_LEVEL_STEP, g * ANSI_LEVEL_STEP, b * ANSI_LEVEL_STEP)
}

/// Background opacity for a cell of the given luminance.
#[inline]
pub fn background_alpha(luminance: f32) -> f32 {
    (luminance * BACKGROUND_ALPHA_SCALE / 255.0).clamp(0.0, 1.0)
}

/// Resolve the color descriptor for a tone-mapped sample.
///
/// Returns `None` in grayscale mode.
pub fn resolve(mode: ColorMode, rgb: [f32; 3], luminance: f32) -> Option<CellColor> {
    match mode {
        ColorMode::Grayscale => None,
        ColorMode::Rgb => Some(CellColor::Rgb {
            foreground: Rgb::from_f32(rgb),
        }),
        ColorMode::FullRgb => {
            let foreground = Rgb::from_f32(rgb);
            Some(CellColor::FullRgb {
                foreground,
                background: Rgba {
                    r: foreground.r,
                    g: foreground.g,
                    b: foreground.b,
                    a: background_alpha(luminance),
                },
            })
        }
        ColorMode::Ansi256 => {
            let index = ansi256_index(rgb);
            Some(CellColor::Ansi256 {
                index,
                approx: ansi256_to_rgb(index),
            })
        }
    }
}
