//! Decoding and resampling of pixel sources into fixed-size RGBA grids.

use std::borrow::Cow;
use std::path::PathBuf;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::error::{ConvertError, Result};

/// A `width × height` grid of RGBA samples in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw RGBA buffer.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes and both
    /// dimensions must be at least 1.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize * 4 {
            return Err(ConvertError::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Grid of a single repeated color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let data = rgba.repeat(width as usize * height as usize);
        Self::from_rgba(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA sample at (x, y). Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.data[idx..idx + 4].copy_from_slice(&rgba);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

/// Anything that can be resolved to a decoded image.
#[derive(Debug, Clone)]
pub enum PixelSource {
    /// Encoded image bytes (PNG, JPEG, GIF, ...).
    Bytes(Vec<u8>),
    /// Path to an encoded image file.
    Path(PathBuf),
    /// An image that is already decoded.
    Image(DynamicImage),
    /// Raw RGBA samples at native resolution.
    Rgba(PixelGrid),
}

impl PixelSource {
    /// Decode the source into an image.
    pub fn decode(&self) -> Result<Cow<'_, DynamicImage>> {
        match self {
            PixelSource::Bytes(bytes) => Ok(Cow::Owned(image::load_from_memory(bytes)?)),
            PixelSource::Path(path) => {
                let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
                Ok(Cow::Owned(img))
            }
            PixelSource::Image(img) => Ok(Cow::Borrowed(img)),
            PixelSource::Rgba(grid) => {
                let img = RgbaImage::from_raw(grid.width(), grid.height(), grid.data().to_vec())
                    .ok_or(ConvertError::BufferSize {
                        width: grid.width(),
                        height: grid.height(),
                        len: grid.data().len(),
                    })?;
                Ok(Cow::Owned(DynamicImage::ImageRgba8(img)))
            }
        }
    }

    /// Native (width, height) of the source, decoding it if necessary.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        match self {
            PixelSource::Rgba(grid) => Ok((grid.width(), grid.height())),
            PixelSource::Image(img) => Ok((img.width(), img.height())),
            _ => {
                let img = self.decode()?;
                Ok((img.width(), img.height()))
            }
        }
    }
}

impl From<DynamicImage> for PixelSource {
    fn from(img: DynamicImage) -> Self {
        PixelSource::Image(img)
    }
}

impl From<PixelGrid> for PixelSource {
    fn from(grid: PixelGrid) -> Self {
        PixelSource::Rgba(grid)
    }
}

/// Decode `source` and scale it to exactly `width × height` samples.
///
/// The whole source extent is covered (no cropping, aspect ratio is not
/// preserved). Scaling uses a bilinear filter.
pub fn resample(source: &PixelSource, width: u32, height: u32) -> Result<PixelGrid> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimension { width, height });
    }
    if let PixelSource::Rgba(grid) = source {
        if grid.width() == width && grid.height() == height {
            return Ok(grid.clone());
        }
    }
    let img = source.decode()?;
    Ok(resample_image(&img, width, height))
}

/// Scale a decoded image to `width × height` RGBA samples.
pub fn resample_image(img: &DynamicImage, width: u32, height: u32) -> PixelGrid {
    log::debug!(
        "Resampling {}x{} -> {}x{}",
        img.width(),
        img.height(),
        width,
        height
    );
    if img.width() == width && img.height() == height {
        return PixelGrid::from(img.to_rgba8());
    }
    PixelGrid::from(img.resize_exact(width, height, FilterType::Triangle).to_rgba8())
}
