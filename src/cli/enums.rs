//! CLI enum types for charset, color mode, preset and output format options.

use clap::ValueEnum;

use crate::ascii;
use crate::export::Format;
use crate::presets::Preset;

/// Character ramp for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Detailed,
    Blocks,
    Binary,
    Dots,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Detailed => ascii::CharSet::Detailed,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Binary => ascii::CharSet::Binary,
            CharacterSet::Dots => ascii::CharSet::Dots,
        }
    }
}

/// Per-cell color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Grayscale,
    Ansi,
    Rgb,
    FullRgb,
}

impl From<ColorChoice> for ascii::ColorMode {
    fn from(c: ColorChoice) -> Self {
        match c {
            ColorChoice::Grayscale => ascii::ColorMode::Grayscale,
            ColorChoice::Ansi => ascii::ColorMode::Ansi256,
            ColorChoice::Rgb => ascii::ColorMode::Rgb,
            ColorChoice::FullRgb => ascii::ColorMode::FullRgb,
        }
    }
}

/// Named style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetChoice {
    Classic,
    Colored,
    Blocks,
    Matrix,
    HighContrast,
    Inverted,
}

impl From<PresetChoice> for Preset {
    fn from(p: PresetChoice) -> Self {
        match p {
            PresetChoice::Classic => Preset::Classic,
            PresetChoice::Colored => Preset::Colored,
            PresetChoice::Blocks => Preset::Blocks,
            PresetChoice::Matrix => Preset::Matrix,
            PresetChoice::HighContrast => Preset::HighContrast,
            PresetChoice::Inverted => Preset::Inverted,
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatChoice {
    Text,
    Ansi,
    Html,
    Json,
    Png,
}

impl From<FormatChoice> for Format {
    fn from(f: FormatChoice) -> Self {
        match f {
            FormatChoice::Text => Format::Text,
            FormatChoice::Ansi => Format::Ansi,
            FormatChoice::Html => Format::Html,
            FormatChoice::Json => Format::Json,
            FormatChoice::Png => Format::Png,
        }
    }
}
