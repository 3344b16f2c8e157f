//! NES master palette and palette resolution.
//!
//! The PPU can display 64 fixed colors; a tile's 2-bit indices select into a
//! caller-chosen set of 4 of them. Color-table indices are masked to 6 bits
//! before lookup, so out-of-range values alias instead of failing - the
//! hardware ignores the upper bits and this tool keeps that behavior.

/// A single RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const fn c(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(r, g, b)
}

/// Default palette selection: grayscale ramp from the dark $0F backdrop up to
/// white-ish $30. Relies on 6-bit masking staying in place.
pub const DEFAULT_PALETTE: [u8; 4] = [0x0f, 0x20, 0x28, 0x30];

/// 2C02 master palette (RGB), per the nesdev wiki. Entries $xD-$xF of each
/// row are reserved slots rendered as pure black.
pub const MASTER_PALETTE: [Rgb; 64] = [
    c(0x62, 0x62, 0x62), c(0x00, 0x1f, 0xb2), c(0x21, 0x0c, 0xa0), c(0x44, 0x00, 0x96),
    c(0x73, 0x00, 0x6b), c(0x80, 0x00, 0x2e), c(0x6f, 0x0f, 0x00), c(0x4c, 0x1e, 0x00),
    c(0x19, 0x32, 0x00), c(0x00, 0x3b, 0x00), c(0x00, 0x3a, 0x1e), c(0x00, 0x32, 0x5d),
    c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00),
    c(0xb6, 0xb6, 0xb6), c(0x10, 0x5c, 0xe7), c(0x48, 0x3c, 0xdb), c(0x74, 0x2a, 0xd0),
    c(0xa7, 0x25, 0x9f), c(0xb5, 0x2e, 0x5a), c(0xa0, 0x46, 0x17), c(0x79, 0x57, 0x00),
    c(0x46, 0x6e, 0x00), c(0x27, 0x78, 0x00), c(0x00, 0x76, 0x3e), c(0x00, 0x6e, 0x8a),
    c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00),
    c(0xff, 0xff, 0xff), c(0x5f, 0xa8, 0xff), c(0x8f, 0x8a, 0xff), c(0xbc, 0x78, 0xff),
    c(0xec, 0x71, 0xff), c(0xff, 0x76, 0xba), c(0xff, 0x91, 0x6f), c(0xff, 0xa5, 0x29),
    c(0xcc, 0xbf, 0x00), c(0xa4, 0xca, 0x1c), c(0x6d, 0xd8, 0x64), c(0x3f, 0xd4, 0xc5),
    c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00),
    c(0xff, 0xff, 0xff), c(0xbd, 0xe2, 0xff), c(0xd1, 0xd6, 0xff), c(0xe5, 0xce, 0xff),
    c(0xf8, 0xcc, 0xff), c(0xff, 0xce, 0xed), c(0xff, 0xd9, 0xd1), c(0xff, 0xe0, 0xbf),
    c(0xea, 0xea, 0x9e), c(0xd8, 0xef, 0x9e), c(0xc4, 0xf3, 0xbd), c(0xb7, 0xf2, 0xe6),
    c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00), c(0x00, 0x00, 0x00),
];

/// Look up a master-palette color. The index is masked to 6 bits, so any
/// input is valid; 64 aliases to 0, 67 to 3, and so on.
pub fn master_color(index: u8) -> Rgb {
    MASTER_PALETTE[(index & 0x3f) as usize]
}

/// Resolve a list of raw color-table indices to concrete colors, preserving
/// order. Callers conventionally pass exactly 4 indices (one per tile color
/// value) but the length is not enforced here.
pub fn resolve(indices: &[u8]) -> Vec<Rgb> {
    indices.iter().map(|&i| master_color(i)).collect()
}
