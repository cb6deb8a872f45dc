use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use lib_pal::constants::{DEFAULT_IMAGE_PATH, DEFAULT_REPLACEMENT, DEFAULT_STEP_DELAY};
use lib_pal::recolor::RecolorError;
use lib_pal::{replace_colors, ColorReplacement};
use log::info;

/// Replace exact RGB colors in an image, in place, keeping alpha
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image to rewrite
    #[arg(short, long, default_value = DEFAULT_IMAGE_PATH)]
    image: PathBuf,

    /// Replacement as FIND:SET hex colors (`0x`, `#` or bare), applied in order
    #[arg(short, long = "replace", value_name = "FIND:SET", default_value = DEFAULT_REPLACEMENT)]
    replacements: Vec<ColorReplacement>,

    /// Pause between two replacements, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), RecolorError> {
    let args = Args::parse();
    lib_pal::init_logging(args.verbose);

    for replacement in &args.replacements {
        info!("{}: {}", args.image.display(), replacement);
    }

    let changed = replace_colors(
        &args.image,
        &args.replacements,
        Duration::from_millis(args.delay_ms),
    )?;

    if args.verbose {
        println!(
            "Replaced {} pixels in {}",
            changed,
            args.image.display()
        );
    }

    Ok(())
}
