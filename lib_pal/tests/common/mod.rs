#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// Fresh scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lib_pal-{}-{}", name, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// 3x2 image: black, white, blue / yellow, green, near-black.
pub fn small_rgb() -> RgbImage {
    RgbImage::from_raw(
        3,
        2,
        vec![
            0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xAA, //
            0xFF, 0xFF, 0x55, 0x00, 0xAA, 0x00, 0x08, 0x00, 0x00,
        ],
    )
    .unwrap()
}

pub const SMALL_RGB_INDICES: [u8; 6] = [0, 15, 1, 14, 2, 0];

/// Vertical gradient across all 256 gray levels.
pub fn gradient(width: u32) -> RgbImage {
    RgbImage::from_fn(width, 256, |_, y| Rgb([y as u8, y as u8, y as u8]))
}

pub fn write_bmp(path: &Path, image: &RgbImage) {
    image.save(path).unwrap();
}

/// RGBA image where every other pixel is the given color with varying alpha.
pub fn checker_rgba(width: u32, height: u32, color: [u8; 3]) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([color[0], color[1], color[2], (x * 16 + y) as u8])
        } else {
            Rgba([0x10, 0x20, 0x30, 255])
        }
    })
}
