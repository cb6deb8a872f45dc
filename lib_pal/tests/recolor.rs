mod common;

use std::fs;
use std::time::Duration;

use common::{checker_rgba, scratch_dir};
use image::{Rgba, RgbaImage};
use lib_pal::recolor::RecolorError;
use lib_pal::{parse_hex, replace_color, replace_colors, ColorReplacement, Rgb};

#[test]
fn test_replace_color_in_place() {
    let dir = scratch_dir("recolor-single");
    let path = dir.join("logo.png");
    let original = checker_rgba(4, 3, [8, 0, 0]);
    original.save(&path).unwrap();

    let changed = replace_color(&path, parse_hex("0x080000").unwrap(), parse_hex("0x55FFFF").unwrap())
        .unwrap();
    assert_eq!(changed, 6);

    let result = image::open(&path).unwrap().into_rgba8();
    for (x, y, pixel) in result.enumerate_pixels() {
        let before = original.get_pixel(x, y);
        if (x + y) % 2 == 0 {
            assert_eq!(*pixel, Rgba([0x55, 0xFF, 0xFF, before[3]]));
        } else {
            assert_eq!(pixel, before);
        }
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_replace_color_without_match() {
    let dir = scratch_dir("recolor-nomatch");
    let path = dir.join("logo.png");
    let original = checker_rgba(4, 4, [1, 2, 3]);
    original.save(&path).unwrap();

    let changed = replace_color(&path, Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)).unwrap();
    assert_eq!(changed, 0);
    assert_eq!(image::open(&path).unwrap().into_rgba8(), original);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_replace_colors_chain_through_file() {
    let dir = scratch_dir("recolor-chain");
    let path = dir.join("chain.png");
    let original = RgbaImage::from_raw(2, 1, vec![1, 1, 1, 255, 2, 2, 2, 128]).unwrap();
    original.save(&path).unwrap();

    // Step two sees what step one wrote, so both pixels end up at 3
    let replacements = [
        ColorReplacement::new(Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)),
        ColorReplacement::new(Rgb::new(2, 2, 2), Rgb::new(3, 3, 3)),
    ];
    let changed = replace_colors(&path, &replacements, Duration::ZERO).unwrap();
    assert_eq!(changed, 3);

    let result = image::open(&path).unwrap().into_rgba8();
    assert_eq!(*result.get_pixel(0, 0), Rgba([3, 3, 3, 255]));
    assert_eq!(*result.get_pixel(1, 0), Rgba([3, 3, 3, 128]));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_replace_color_missing_file() {
    let dir = scratch_dir("recolor-missing");
    let result = replace_color(dir.join("missing.png"), Rgb::new(0, 0, 0), Rgb::new(1, 1, 1));
    assert!(matches!(result, Err(RecolorError::Image(_))));

    fs::remove_dir_all(dir).unwrap();
}
