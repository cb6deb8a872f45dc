use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ::image::RgbImage;

use crate::compression::{decompress, DecompressionError};

/// A 4bpp packed image. Only `data` goes to disk; the dimensions stay in
/// memory since the raw format has no header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PackedImage {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Writes the raw packed bytes, no header.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&self.data)?;
        file.flush()
    }

    /// Renders the packed indices back to palette colors.
    pub fn to_rgb_image(&self) -> Result<RgbImage, DecompressionError> {
        let rgb = decompress(&self.data, self.pixel_count())?;
        let len = rgb.len();
        RgbImage::from_raw(self.width, self.height, rgb).ok_or(DecompressionError::DimensionMismatch {
            width: self.width,
            height: self.height,
            len,
        })
    }
}
