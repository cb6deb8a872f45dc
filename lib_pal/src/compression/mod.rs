pub mod nibble;
pub mod palette;

use log::{debug, info};
use nibble::{NibblePackError, NibbleUnpackError};
use palette::{PaletteExpansionError, PaletteQuantizationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompressionError {
    #[error("Palette quantization failed")]
    PaletteQuantizationFailed(#[from] PaletteQuantizationError),
    #[error("Nibble packing failed")]
    NibblePackingFailed(#[from] NibblePackError),
}

#[derive(Error, Debug)]
pub enum DecompressionError {
    #[error("Nibble unpacking failed")]
    NibbleUnpackingFailed(#[from] NibbleUnpackError),
    #[error("Palette expansion failed")]
    PaletteExpansionFailed(#[from] PaletteExpansionError),
    #[error("Expanded {len} bytes do not fill a {width}x{height} RGB image")]
    DimensionMismatch { width: u32, height: u32, len: usize },
}

/// Turns a row-major RGB buffer into packed 4bpp VGA indices.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    debug!("Starting compression of {} RGB bytes", data.len());

    // Step 1: Nearest VGA color per pixel
    let indices = palette::palette_quantization(data)?;
    debug!("Palette quantization: {} indices", indices.len());

    // Step 2: Two indices per byte
    let packed = nibble::pack_nibbles(&indices)?;
    debug!("Nibble packing: {} bytes", packed.len());

    info!(
        "Compression completed: {} pixels into {} bytes",
        indices.len(),
        packed.len()
    );

    Ok(packed)
}

/// Reverses [`compress`] up to quantization loss, giving back RGB bytes.
pub fn decompress(packed: &[u8], pixel_count: usize) -> Result<Vec<u8>, DecompressionError> {
    debug!(
        "Starting decompression of {} bytes into {} pixels",
        packed.len(),
        pixel_count
    );

    let indices = nibble::unpack_nibbles(packed, pixel_count)?;
    let expanded = palette::palette_expansion(&indices)?;
    debug!("Palette expansion: {} bytes", expanded.len());

    Ok(expanded)
}
