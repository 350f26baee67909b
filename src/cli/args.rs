//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, ColorChoice, FormatChoice, PresetChoice};

/// Parse a brightness or contrast factor (> 0).
fn parse_factor(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("Factor must be greater than 0, got {}", value));
    }
    Ok(value)
}

/// Parse and validate a size in cells (>= 1).
fn parse_cells(s: &str) -> Result<u32, String> {
    let cells: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid size", s))?;
    if cells == 0 {
        return Err("Size must be at least 1".to_string());
    }
    Ok(cells)
}

/// Parse a percentage of the source resolution (0-100].
fn parse_percent(s: &str) -> Result<f32, String> {
    let percent: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(percent > 0.0 && percent <= 100.0) {
        return Err(format!("Percent must be in (0, 100], got {}", percent));
    }
    Ok(percent)
}

/// Convert images into grids of text glyphs
#[derive(Parser, Debug)]
#[command(name = "glyphgrid")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
#[command(after_help = "EXAMPLES:
    # 80 columns of plain text
    glyphgrid convert photo.jpg --width 80

    # Colored terminal output
    glyphgrid convert photo.jpg --color rgb --format ansi

    # HTML page with per-character colors
    glyphgrid convert photo.jpg --preset colored -o photo.html

    # Render to PNG with a monospace font
    glyphgrid convert photo.jpg -o photo.png --font DejaVuSansMono.ttf")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert one or more images
    Convert(ConvertArgs),
    /// List available character sets
    Charsets,
    /// List available style presets
    Presets,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ConvertArgs {
    /// Image files to convert
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output width in characters
    #[arg(long, short = 'W', value_parser = parse_cells)]
    pub width: Option<u32>,

    /// Output height in characters (default: keep aspect ratio)
    #[arg(long, short = 'H', value_parser = parse_cells)]
    pub height: Option<u32>,

    /// Size as a percentage of the source resolution
    #[arg(long, short, value_parser = parse_percent, conflicts_with_all = ["width", "height"])]
    pub percent: Option<f32>,

    /// Character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Custom characters, least dense first
    #[arg(long, conflicts_with = "charset")]
    pub chars: Option<String>,

    /// Color mode
    #[arg(long)]
    pub color: Option<ColorChoice>,

    /// Brightness factor (1.0 = unchanged)
    #[arg(long, short, value_parser = parse_factor)]
    pub brightness: Option<f32>,

    /// Contrast factor (1.0 = unchanged)
    #[arg(long, value_parser = parse_factor)]
    pub contrast: Option<f32>,

    /// Invert the character ramp (for light backgrounds)
    #[arg(long, short)]
    pub invert: bool,

    /// Boost strong edges before mapping
    #[arg(long, short)]
    pub edges: bool,

    /// Style preset, applied before the other flags
    #[arg(long)]
    pub preset: Option<PresetChoice>,

    /// Output format (default: from the output extension)
    #[arg(long, short)]
    pub format: Option<FormatChoice>,

    /// Output file, or directory when converting several inputs
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Font for PNG output
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Font size in pixels for HTML and PNG output
    #[arg(long, value_parser = parse_factor)]
    pub font_size: Option<f32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
