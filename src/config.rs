//! Configuration file handling for glyphgrid.
//!
//! Loads configuration from `<config dir>/glyphgrid/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{
    CharSet, ColorMode, ConversionParameters, GlyphRamp, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::export::{parse_hex_color, ExportOptions};
use crate::presets::Preset;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ConversionConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    /// Rows; derived from the image aspect ratio when unset.
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub charset: Option<String>,
    /// Overrides `charset` when present; an empty string means the default ramp.
    #[serde(default)]
    pub custom_charset: Option<String>,
    #[serde(default)]
    pub color_mode: Option<String>,
    #[serde(default = "default_one")]
    pub brightness: f32,
    #[serde(default = "default_one")]
    pub contrast: f32,
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub edge_detection: bool,
    #[serde(default)]
    pub preset: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: None,
            charset: None,
            custom_charset: None,
            color_mode: None,
            brightness: 1.0,
            contrast: 1.0,
            inverted: false,
            edge_detection: false,
            preset: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default)]
    pub font: Option<PathBuf>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            line_height: default_line_height(),
            font: None,
            foreground: None,
            background: None,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_one() -> f32 {
    1.0
}

fn default_font_size() -> f32 {
    8.0
}

fn default_line_height() -> f32 {
    0.7
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path that must exist.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

impl ConversionConfig {
    pub fn charset(&self) -> Result<Option<CharSet>, ConfigError> {
        self.charset
            .as_deref()
            .map(|name| {
                CharSet::from_name(name).ok_or_else(|| invalid("conversion.charset", name))
            })
            .transpose()
    }

    pub fn color_mode(&self) -> Result<Option<ColorMode>, ConfigError> {
        self.color_mode
            .as_deref()
            .map(|name| {
                ColorMode::from_name(name).ok_or_else(|| invalid("conversion.color_mode", name))
            })
            .transpose()
    }

    pub fn preset(&self) -> Result<Option<Preset>, ConfigError> {
        self.preset
            .as_deref()
            .map(|name| Preset::from_name(name).ok_or_else(|| invalid("conversion.preset", name)))
            .transpose()
    }

    /// Parameters described by this section alone.
    ///
    /// A configured preset is applied first; explicit charset, color mode
    /// and tone values that differ from their defaults win over it.
    pub fn to_parameters(&self) -> Result<ConversionParameters, ConfigError> {
        let mut params =
            ConversionParameters::new(self.width, self.height.unwrap_or(DEFAULT_HEIGHT));
        if let Some(preset) = self.preset()? {
            params = preset.apply(params);
        }
        if let Some(text) = &self.custom_charset {
            params.ramp = GlyphRamp::custom(text);
        } else if let Some(charset) = self.charset()? {
            params.ramp = charset.ramp();
        }
        if let Some(mode) = self.color_mode()? {
            params.color_mode = mode;
        }
        if self.brightness != 1.0 {
            params.brightness = self.brightness;
        }
        if self.contrast != 1.0 {
            params.contrast = self.contrast;
        }
        params.inverted |= self.inverted;
        params.edge_detection = self.edge_detection;
        Ok(params)
    }
}

impl ExportConfig {
    pub fn to_options(&self) -> Result<ExportOptions, ConfigError> {
        let defaults = ExportOptions::default();
        let color = |field: &str, value: &Option<String>, fallback| match value {
            Some(s) => parse_hex_color(s).ok_or_else(|| invalid(field, s)),
            None => Ok(fallback),
        };
        Ok(ExportOptions {
            font_size: self.font_size,
            line_height: self.line_height,
            foreground: color("export.foreground", &self.foreground, defaults.foreground)?,
            background: color("export.background", &self.background, defaults.background)?,
            font: self.font.clone(),
            title: defaults.title,
        })
    }
}

fn invalid(field: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        field: String,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{}' for {}", value, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphgrid").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphgrid/config.toml")
        })
}

/// Contents written by `glyphgrid config init`.
pub const DEFAULT_CONFIG: &str = r##"# glyphgrid configuration

[conversion]
# Output width in characters
width = 100
# Output height in characters (default: keep the image aspect ratio)
# height = 50
# Character set: standard, detailed, blocks, binary, dots
charset = "standard"
# Custom characters, least dense first (overrides charset)
# custom_charset = " .:-=+*#%@"
# Color mode: grayscale, ansi, rgb, full-rgb
color_mode = "grayscale"
brightness = 1.0
contrast = 1.0
inverted = false
# Sobel edge boost
edge_detection = false
# Style preset: classic, colored, blocks, matrix, high-contrast, inverted
# preset = "classic"

[export]
font_size = 8.0
line_height = 0.7
# Monospace font used for PNG export
# font = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"
foreground = "#00ff00"
background = "#000000"
"##;
