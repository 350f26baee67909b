//! Named style presets.
//!
//! A preset overwrites charset, color mode, inversion, brightness and
//! contrast; it leaves size and edge detection alone.

use crate::ascii::{CharSet, ColorMode, ConversionParameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Classic,
    Colored,
    Blocks,
    Matrix,
    HighContrast,
    Inverted,
}

/// Settings a preset applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetStyle {
    pub charset: CharSet,
    pub color_mode: ColorMode,
    pub inverted: bool,
    pub brightness: f32,
    pub contrast: f32,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Classic,
        Preset::Colored,
        Preset::Blocks,
        Preset::Matrix,
        Preset::HighContrast,
        Preset::Inverted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Colored => "colored",
            Preset::Blocks => "blocks",
            Preset::Matrix => "matrix",
            Preset::HighContrast => "high-contrast",
            Preset::Inverted => "inverted",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn style(&self) -> PresetStyle {
        let base = PresetStyle {
            charset: CharSet::Standard,
            color_mode: ColorMode::Grayscale,
            inverted: false,
            brightness: 1.0,
            contrast: 1.0,
        };
        match self {
            // Matrix only differs in presentation (green on black)
            Preset::Classic | Preset::Matrix => base,
            Preset::Colored => PresetStyle {
                color_mode: ColorMode::Rgb,
                ..base
            },
            Preset::Blocks => PresetStyle {
                charset: CharSet::Blocks,
                ..base
            },
            Preset::HighContrast => PresetStyle {
                charset: CharSet::Detailed,
                brightness: 1.2,
                contrast: 1.5,
                ..base
            },
            Preset::Inverted => PresetStyle {
                inverted: true,
                ..base
            },
        }
    }

    /// Overwrite the styled fields of `params`.
    pub fn apply(&self, params: ConversionParameters) -> ConversionParameters {
        let style = self.style();
        log::debug!("Applying preset {}", self.name());
        ConversionParameters {
            ramp: style.charset.ramp(),
            color_mode: style.color_mode,
            inverted: style.inverted,
            brightness: style.brightness,
            contrast: style.contrast,
            ..params
        }
    }
}
