use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VgaColor {
    pub name: &'static str,
    pub rgb: Rgb,
    /// Palette byte: the index in the high nibble, duplicated in the low nibble.
    pub value: u8,
}

impl VgaColor {
    const fn new(name: &'static str, r: u8, g: u8, b: u8, value: u8) -> Self {
        Self {
            name,
            rgb: Rgb::new(r, g, b),
            value,
        }
    }

    /// 4-bit palette index (0-15).
    pub const fn index(&self) -> u8 {
        self.value >> 4
    }

    pub fn by_name(name: &str) -> Option<&'static VgaColor> {
        VGA_PALETTE.iter().find(|color| color.name == name)
    }
}

pub const PALETTE_LEN: usize = 16;

/// The 16 VGA text-mode colors. Order matters: nearest-color ties resolve to
/// the earlier entry.
pub static VGA_PALETTE: [VgaColor; PALETTE_LEN] = [
    VgaColor::new("black", 0x00, 0x00, 0x00, 0x00),
    VgaColor::new("blue", 0x00, 0x00, 0xAA, 0x11),
    VgaColor::new("green", 0x00, 0xAA, 0x00, 0x22),
    VgaColor::new("cyan", 0x00, 0xAA, 0xAA, 0x33),
    VgaColor::new("red", 0xAA, 0x00, 0x00, 0x44),
    VgaColor::new("magenta", 0xAA, 0x00, 0xAA, 0x55),
    VgaColor::new("brown", 0xAA, 0x55, 0x00, 0x66),
    VgaColor::new("ltgray", 0xAA, 0xAA, 0xAA, 0x77),
    VgaColor::new("dkgray", 0x55, 0x55, 0x55, 0x88),
    VgaColor::new("ltblue", 0x55, 0x55, 0xFF, 0x99),
    VgaColor::new("ltgreen", 0x55, 0xFF, 0x55, 0xAA),
    VgaColor::new("ltcyan", 0x55, 0xFF, 0xFF, 0xBB),
    VgaColor::new("ltred", 0xFF, 0x55, 0x55, 0xCC),
    VgaColor::new("ltmagenta", 0xFF, 0x55, 0xFF, 0xDD),
    VgaColor::new("yellow", 0xFF, 0xFF, 0x55, 0xEE),
    VgaColor::new("white", 0xFF, 0xFF, 0xFF, 0xFF),
];

pub fn palette_color(index: u8) -> Option<&'static VgaColor> {
    VGA_PALETTE.get(index as usize)
}

/// Returns the index of the palette entry closest to `color`.
///
/// The first entry starts as the incumbent and is only replaced by a strictly
/// smaller squared distance, so equidistant entries resolve to the earlier one.
pub fn nearest_index(color: Rgb) -> u8 {
    let mut best = &VGA_PALETTE[0];
    let mut best_distance = color.distance_squared(best.rgb);
    for candidate in &VGA_PALETTE[1..] {
        let distance = color.distance_squared(candidate.rgb);
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }

    best.index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_values_encode_index() {
        for (i, color) in VGA_PALETTE.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
            assert_eq!(color.value & 0x0F, color.value >> 4);
        }
    }

    #[test]
    fn test_exact_colors_map_to_themselves() {
        for color in &VGA_PALETTE {
            assert_eq!(nearest_index(color.rgb), color.index(), "{}", color.name);
        }
    }

    #[test]
    fn test_equidistant_resolves_to_earlier_entry() {
        // (0,0,0x55) is 0x55 away from black and from blue
        let color = Rgb::new(0x00, 0x00, 0x55);
        assert_eq!(
            color.distance_squared(VGA_PALETTE[0].rgb),
            color.distance_squared(VGA_PALETTE[1].rgb)
        );
        assert_eq!(nearest_index(color), 0);

        // Halfway between green and cyan
        let color = Rgb::new(0x00, 0xAA, 0x55);
        assert_eq!(
            color.distance_squared(VGA_PALETTE[2].rgb),
            color.distance_squared(VGA_PALETTE[3].rgb)
        );
        assert_eq!(nearest_index(color), 2);

        assert_eq!(nearest_index(Rgb::new(0x55, 0x00, 0x00)), 0);
    }

    #[test]
    fn test_nearest_non_exact() {
        assert_eq!(nearest_index(Rgb::new(8, 0, 0)), 0);
        assert_eq!(nearest_index(Rgb::new(250, 250, 250)), 15);
        assert_eq!(nearest_index(Rgb::new(0xB0, 0x50, 0x08)), 6);
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        assert_eq!(VgaColor::by_name("ltcyan").unwrap().index(), 11);
        assert!(VgaColor::by_name("orange").is_none());
        assert_eq!(palette_color(14).unwrap().name, "yellow");
        assert!(palette_color(16).is_none());
    }
}
