use thiserror::Error;

#[derive(Error, Debug)]
pub enum NibblePackError {
    #[error("index {value} at position {position} does not fit in a nibble")]
    IndexOutOfRange { position: usize, value: u8 },
}

#[derive(Error, Debug)]
pub enum NibbleUnpackError {
    #[error("{pixel_count} pixels cannot come from a {packed_len} byte buffer")]
    LengthMismatch {
        pixel_count: usize,
        packed_len: usize,
    },
}

/// Packed length for `pixel_count` 4-bit values.
pub const fn packed_len(pixel_count: usize) -> usize {
    (pixel_count + 1) / 2
}

/// Packs 4-bit indices two per byte, first one in the high nibble.
/// An odd trailing index gets a zero low nibble.
pub fn pack_nibbles(indices: &[u8]) -> Result<Vec<u8>, NibblePackError> {
    if let Some(position) = indices.iter().position(|&value| value > 0x0F) {
        return Err(NibblePackError::IndexOutOfRange {
            position,
            value: indices[position],
        });
    }

    let packed: Vec<u8> = indices
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect();

    debug_assert_eq!(packed.len(), packed_len(indices.len()));
    Ok(packed)
}

pub fn unpack_nibbles(packed: &[u8], pixel_count: usize) -> Result<Vec<u8>, NibbleUnpackError> {
    if packed_len(pixel_count) != packed.len() {
        return Err(NibbleUnpackError::LengthMismatch {
            pixel_count,
            packed_len: packed.len(),
        });
    }

    let mut indices: Vec<u8> = packed
        .iter()
        .flat_map(|&byte| [byte >> 4, byte & 0x0F])
        .collect();
    indices.truncate(pixel_count);

    Ok(indices)
}
