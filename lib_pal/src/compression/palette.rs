use std::collections::HashMap;

use thiserror::Error;

use crate::color::Rgb;
use crate::palette::{nearest_index, palette_color, PALETTE_LEN};

#[derive(Error, Debug)]
pub enum PaletteQuantizationError {
    #[error("Invalid pixel data length: expected multiple of 3 bytes, got {0}")]
    InvalidPixelDataLength(usize),
}

#[derive(Error, Debug)]
pub enum PaletteExpansionError {
    #[error("Invalid palette index: {0} exceeds palette size of {1}")]
    InvalidPaletteIndex(usize, usize),
}

/// Maps a raw RGB pixel buffer onto the VGA palette.
///
/// # Parameters
/// - `pixels`: A slice of raw pixel data in RGB format, row-major.
///
/// # Returns
/// One palette index (0-15) per pixel, in pixel order.
///
/// # Errors
/// - Returns `PaletteQuantizationError::InvalidPixelDataLength` if input length is not a multiple of 3
pub fn palette_quantization(pixels: &[u8]) -> Result<Vec<u8>, PaletteQuantizationError> {
    if pixels.len() % 3 != 0 {
        return Err(PaletteQuantizationError::InvalidPixelDataLength(
            pixels.len(),
        ));
    }

    // Distinct colors seen in this image only
    let mut cache: HashMap<Rgb, u8> = HashMap::new();
    let mut indices = Vec::with_capacity(pixels.len() / 3);

    for pixel in pixels.chunks_exact(3) {
        let color = Rgb::new(pixel[0], pixel[1], pixel[2]);
        let index = *cache
            .entry(color)
            .or_insert_with(|| nearest_index(color));
        indices.push(index);
    }

    log::debug!(
        "Quantized {} pixels ({} distinct colors)",
        indices.len(),
        cache.len()
    );

    Ok(indices)
}

/// Expands palette indices back into RGB pixel data.
///
/// # Errors
/// - Returns `PaletteExpansionError::InvalidPaletteIndex` if any index exceeds the palette size
pub fn palette_expansion(indices: &[u8]) -> Result<Vec<u8>, PaletteExpansionError> {
    let mut expanded = Vec::with_capacity(indices.len() * 3);

    for &index in indices {
        let color = palette_color(index).ok_or(PaletteExpansionError::InvalidPaletteIndex(
            index as usize,
            PALETTE_LEN,
        ))?;
        expanded.extend_from_slice(&color.rgb.to_array());
    }

    Ok(expanded)
}
