//! Serializers for conversion results: plain text, ANSI terminal output,
//! standalone HTML, JSON and PNG.

mod ansi;
mod html;
mod json;
mod png;

pub use ansi::render_ansi;
pub use html::render_html_document;
pub use json::render_json;
pub use png::{load_font, render_png, write_png, GlyphBitmap, GlyphRasterizer, PADDING};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ascii::{ConversionResult, Rgb};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error writing '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to load font '{path}': {message}")]
    Font { path: PathBuf, message: String },
    #[error("PNG export requires a font file (set export.font or --font)")]
    MissingFont,
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Plain text, one row per line.
    #[default]
    Text,
    /// Text with terminal color escapes.
    Ansi,
    /// Standalone HTML document.
    Html,
    Json,
    Png,
}

impl Format {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" | "text" => Some(Format::Text),
            "ans" | "ansi" => Some(Format::Ansi),
            "html" | "htm" => Some(Format::Html),
            "json" => Some(Format::Json),
            "png" => Some(Format::Png),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Ansi => "ans",
            Format::Html => "html",
            Format::Json => "json",
            Format::Png => "png",
        }
    }
}

/// Presentation settings shared by the HTML and PNG exporters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Glyph color when a cell has no color of its own.
    pub foreground: Rgb,
    pub background: Rgb,
    /// Monospace font used for PNG rendering.
    pub font: Option<PathBuf>,
    /// Document title for HTML output.
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font_size: 8.0,
            line_height: 0.7,
            foreground: Rgb::new(0x00, 0xff, 0x00),
            background: Rgb::new(0x00, 0x00, 0x00),
            font: None,
            title: "ASCII Art".to_string(),
        }
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into a color.
pub fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Render a textual format. Returns `None` for [`Format::Png`].
pub fn render_string(
    result: &ConversionResult,
    format: Format,
    options: &ExportOptions,
) -> Result<Option<String>> {
    let out = match format {
        Format::Text => result.text.clone(),
        Format::Ansi => render_ansi(result),
        Format::Html => render_html_document(result, options),
        Format::Json => render_json(result)?,
        Format::Png => return Ok(None),
    };
    Ok(Some(out))
}

/// Write `result` to `path` in the given format.
pub fn write(
    result: &ConversionResult,
    format: Format,
    options: &ExportOptions,
    path: &Path,
) -> Result<()> {
    match render_string(result, format, options)? {
        Some(text) => std::fs::write(path, text).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let font_path = options.font.as_deref().ok_or(ExportError::MissingFont)?;
            let font = load_font(font_path)?;
            write_png(result, options, &font, path)?;
        }
    }
    log::info!("Wrote {} output to {}", format.extension(), path.display());
    Ok(())
}
