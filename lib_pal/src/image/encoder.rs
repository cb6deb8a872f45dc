use ::image::RgbImage;
use log::{debug, info};
use thiserror::Error;

use super::format::PackedImage;
use crate::compression::{compress, CompressionError};

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Failed to compress image data")]
    CompressionFailed(#[from] CompressionError),
}

pub fn encode(image: &RgbImage) -> Result<PackedImage, EncodingError> {
    let (width, height) = image.dimensions();
    info!("Starting encoding of {}x{} image", width, height);

    let packed = compress(image.as_raw())?;
    debug!("Packed data: {} bytes", packed.len());

    Ok(PackedImage::new(width, height, packed))
}
