use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HexColorError {
    #[error("Invalid hex color {0:?}: expected 6 hex digits after an optional `0x` or `#` prefix")]
    InvalidLength(String),
    #[error("Invalid hex color {0:?}: non-hex digit found")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Parses `RRGGBB`, `0xRRGGBB` or `#RRGGBB` into an [`Rgb`].
///
/// # Errors
/// - `HexColorError::InvalidLength` if the digits after the prefix are not exactly six
/// - `HexColorError::InvalidDigit` if any of them is not a hex digit
pub fn parse_hex(hex_color: &str) -> Result<Rgb, HexColorError> {
    let digits = hex_color
        .strip_prefix("0x")
        .or_else(|| hex_color.strip_prefix('#'))
        .unwrap_or(hex_color);

    if digits.len() != 6 {
        return Err(HexColorError::InvalidLength(hex_color.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexColorError::InvalidDigit(hex_color.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| HexColorError::InvalidDigit(hex_color.to_string()))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
