pub mod color;
pub mod compression;
pub mod constants;
pub mod convert;
pub mod image;
pub mod palette;
pub mod recolor;

use log::*;
use std::io::Write;

pub use crate::color::{parse_hex, HexColorError, Rgb};
pub use crate::convert::{convert_directory, convert_file, Conversion, DirectoryReport};
pub use crate::image::format::PackedImage;
pub use crate::image::{decode, encode};
pub use crate::palette::{nearest_index, VgaColor, VGA_PALETTE};
pub use crate::recolor::{replace_color, replace_colors, ColorReplacement};

/// Sets up `env_logger` on stderr. `RUST_LOG` still overrides the level.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
