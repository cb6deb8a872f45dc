use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use ::image::{ImageError, Rgba, RgbaImage};
use log::{debug, info};
use thiserror::Error;

use crate::color::{parse_hex, HexColorError, Rgb};

#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] HexColorError),
    #[error("Invalid replacement {0:?}: expected FIND:SET")]
    InvalidReplacement(String),
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}

/// One `find -> set` step of an in-place recolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorReplacement {
    pub find: Rgb,
    pub set: Rgb,
}

impl ColorReplacement {
    pub fn new(find: Rgb, set: Rgb) -> Self {
        Self { find, set }
    }

    pub fn from_hex(find: &str, set: &str) -> Result<Self, RecolorError> {
        Ok(Self::new(parse_hex(find)?, parse_hex(set)?))
    }
}

impl FromStr for ColorReplacement {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (find, set) = s
            .split_once(':')
            .ok_or_else(|| RecolorError::InvalidReplacement(s.to_string()))?;
        Self::from_hex(find.trim(), set.trim())
    }
}

impl fmt::Display for ColorReplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.find, self.set)
    }
}

/// Rewrites every pixel whose RGB is exactly `find` to `set`, keeping alpha.
/// Returns the number of pixels changed.
pub fn recolor_pixels(image: &mut RgbaImage, find: Rgb, set: Rgb) -> usize {
    let mut changed = 0;
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        if Rgb::new(r, g, b) == find {
            *pixel = Rgba([set.r, set.g, set.b, a]);
            changed += 1;
        }
    }
    changed
}

/// Loads `path`, replaces `find` with `set` and saves over the same file.
///
/// The file is always re-saved as RGBA, even with no matching pixel.
pub fn replace_color(path: impl AsRef<Path>, find: Rgb, set: Rgb) -> Result<usize, RecolorError> {
    let path = path.as_ref();

    let mut image = ::image::open(path)?.into_rgba8();
    let changed = recolor_pixels(&mut image, find, set);
    image.save(path)?;

    debug!(
        "{}: {} -> {} on {} pixels",
        path.display(),
        find,
        set,
        changed
    );
    Ok(changed)
}

/// Applies each replacement in turn, each one reading back what the
/// previous one wrote. Sleeps `step_delay` between steps.
///
/// Stops at the first failing step. Returns the total of changed pixels.
pub fn replace_colors(
    path: impl AsRef<Path>,
    replacements: &[ColorReplacement],
    step_delay: Duration,
) -> Result<usize, RecolorError> {
    let path = path.as_ref();
    let mut total = 0;

    for (step, replacement) in replacements.iter().enumerate() {
        if step > 0 && !step_delay.is_zero() {
            thread::sleep(step_delay);
        }
        total += replace_color(path, replacement.find, replacement.set)?;
    }

    info!(
        "Recolored {}: {} steps, {} pixels changed",
        path.display(),
        replacements.len(),
        total
    );
    Ok(total)
}
