use std::time::Duration;

pub const FILE_EXT: &str = "bin";
pub const SOURCE_EXT: &str = "bmp";

/// Pause between two in-place color replacements on the same file.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_IMAGE_PATH: &str = "./bitmaps/lamblogo.png";
pub const DEFAULT_REPLACEMENT: &str = "0x080000:0x55FFFF";
