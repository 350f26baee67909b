//! glyphgrid library crate.
//!
//! Converts raster images into grids of text glyphs, optionally with
//! per-cell color, and serializes the result as text, ANSI, HTML, JSON
//! or PNG.
//!
//! ```no_run
//! use glyphgrid::ascii::{convert, ConversionParameters, PixelSource};
//!
//! let source = PixelSource::Path("photo.jpg".into());
//! let result = convert(&source, &ConversionParameters::new(80, 40))?;
//! print!("{}", result.text);
//! # Ok::<(), glyphgrid::ConvertError>(())
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod presets;

pub use ascii::{convert, ConversionParameters, ConversionResult, PixelSource};
pub use error::ConvertError;
