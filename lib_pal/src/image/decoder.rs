use std::path::Path;

use ::image::{ImageError, RgbImage};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to decode image: {0}")]
    Image(#[from] ImageError),
}

/// Reads and decodes the whole image, then drops alpha.
///
/// The file is closed once decoding returns.
pub fn decode(path: impl AsRef<Path>) -> Result<RgbImage, DecodeError> {
    let path = path.as_ref();

    let decoded = ::image::open(path)?;
    debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.into_rgb8())
}
