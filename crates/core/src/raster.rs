//! Tile rasterization and sheet composition.
//!
//! A decoded tile plus a resolved 4-color palette renders to an
//! `(8*scale) x (8*scale)` block of RGB pixels; a whole CHR buffer composes
//! into one sheet raster, tiles laid out row-major in buffer order.

use crate::palette::Rgb;
use crate::tile::{self, TileIndices, TILE_DIM};

/// A width x height grid of RGB pixels, row-major, black-initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

/// Widen before multiplying: `width * height` can exceed `u32` for extreme
/// sheet dimensions, and a wrapped product would under-allocate silently.
fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; pixel_count(width, height)],
        }
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index_of(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.index_of(x, y);
        self.pixels[i] = color;
    }

    /// Flatten to packed `[r, g, b, r, g, b, ...]` bytes for image encoding.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            out.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out
    }
}

/// Render one decoded tile with the given palette and integer scale.
///
/// Each logical pixel becomes a solid `scale x scale` block; no filtering.
/// Contract: `scale >= 1` (the CLI validates user input before getting here).
pub fn render_tile(tile: &TileIndices, palette: &[Rgb; 4], scale: u32) -> Raster {
    let dim = TILE_DIM as u32 * scale;
    let mut block = Raster::new(dim, dim);
    for (y, row) in tile.iter().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let color = palette[px as usize];
            for dy in 0..scale {
                for dx in 0..scale {
                    block.set(x as u32 * scale + dx, y as u32 * scale + dy, color);
                }
            }
        }
    }
    block
}

/// A composed sheet plus the bookkeeping the caller needs to report on it.
///
/// `dropped_bytes` is non-zero when the source buffer ended in a partial tile
/// record; the trailing bytes are excluded from the sheet and the caller is
/// expected to surface a warning.
#[derive(Debug, Clone)]
pub struct TileSheet {
    pub raster: Raster,
    pub tile_count: usize,
    pub dropped_bytes: usize,
}

/// Compose every complete tile in `data` into one sheet raster.
///
/// Tile `i` lands at grid position `(i / tiles_per_row, i % tiles_per_row)`,
/// matching buffer order exactly. Unused cells in the last row stay black.
/// Contract: `tiles_per_row >= 1` and `scale >= 1`.
pub fn compose_sheet(data: &[u8], palette: &[Rgb; 4], tiles_per_row: u32, scale: u32) -> TileSheet {
    let tile_count = tile::tile_count(data.len());
    let dropped_bytes = tile::trailing_bytes(data.len());

    let rows = (tile_count as u32).div_ceil(tiles_per_row);
    let tile_size = TILE_DIM as u32 * scale;
    let mut raster = Raster::new(tiles_per_row * tile_size, rows * tile_size);

    for i in 0..tile_count {
        let block = render_tile(&tile::decode_tile(data, i), palette, scale);
        let x0 = (i as u32 % tiles_per_row) * tile_size;
        let y0 = (i as u32 / tiles_per_row) * tile_size;
        for y in 0..tile_size {
            for x in 0..tile_size {
                raster.set(x0 + x, y0 + y, block.get(x, y));
            }
        }
    }

    TileSheet {
        raster,
        tile_count,
        dropped_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{master_color, resolve, DEFAULT_PALETTE};
    use crate::tile::TILE_BYTES;

    fn default_colors() -> [Rgb; 4] {
        let v = resolve(&DEFAULT_PALETTE);
        [v[0], v[1], v[2], v[3]]
    }

    /// One tile whose row 0 starts with color index 3 at the left edge.
    fn marker_tile() -> Vec<u8> {
        let mut data = vec![0u8; TILE_BYTES];
        data[0] = 0b1000_0000;
        data[8] = 0b1000_0000;
        data
    }

    #[test]
    fn test_render_tile_dimensions() {
        let palette = default_colors();
        let tile = tile::decode_tile(&marker_tile(), 0);
        for scale in [1, 2, 3] {
            let block = render_tile(&tile, &palette, scale);
            assert_eq!(block.width, 8 * scale);
            assert_eq!(block.height, 8 * scale);
        }
    }

    #[test]
    fn test_render_tile_scale_replicates_solid_blocks() {
        let palette = default_colors();
        let tile = tile::decode_tile(&marker_tile(), 0);
        let small = render_tile(&tile, &palette, 1);
        let big = render_tile(&tile, &palette, 3);

        // Nearest-neighbor downsample of the scale-3 block must equal scale 1,
        // and each 3x3 cell must be a single solid color.
        for y in 0..8 {
            for x in 0..8 {
                let expected = small.get(x, y);
                for dy in 0..3 {
                    for dx in 0..3 {
                        assert_eq!(big.get(x * 3 + dx, y * 3 + dy), expected);
                    }
                }
            }
        }
    }

    #[test]
    fn test_render_tile_applies_palette() {
        let palette = default_colors();
        let tile = tile::decode_tile(&marker_tile(), 0);
        let block = render_tile(&tile, &palette, 1);
        assert_eq!(block.get(0, 0), master_color(0x30));
        assert_eq!(block.get(1, 0), master_color(0x0f));
    }

    #[test]
    fn test_sheet_dimensions_17_tiles() {
        let data = vec![0u8; TILE_BYTES * 17];
        let sheet = compose_sheet(&data, &default_colors(), 16, 1);
        assert_eq!(sheet.tile_count, 17);
        // 17 tiles at 16 per row -> 2 rows regardless of scale
        assert_eq!(sheet.raster.width, 16 * 8);
        assert_eq!(sheet.raster.height, 2 * 8);

        let scaled = compose_sheet(&data, &default_colors(), 16, 2);
        assert_eq!(scaled.raster.width, 16 * 16);
        assert_eq!(scaled.raster.height, 2 * 16);
    }

    #[test]
    fn test_sheet_tile_17_wraps_to_second_row() {
        // 16 blank tiles, then the marker tile: its marker pixel must land at
        // the top-left of grid row 1, column 0.
        let mut data = vec![0u8; TILE_BYTES * 16];
        data.extend_from_slice(&marker_tile());

        let sheet = compose_sheet(&data, &default_colors(), 16, 1);
        assert_eq!(sheet.raster.get(0, 8), master_color(0x30));
        // And nowhere in row 0
        for x in 0..sheet.raster.width {
            assert_eq!(sheet.raster.get(x, 0), master_color(0x0f));
        }
    }

    #[test]
    fn test_sheet_truncates_partial_tile() {
        let mut data = vec![0u8; TILE_BYTES];
        data.push(0xAB); // trailing partial record
        let sheet = compose_sheet(&data, &default_colors(), 16, 1);
        assert_eq!(sheet.tile_count, 1);
        assert_eq!(sheet.dropped_bytes, 1);
    }

    #[test]
    fn test_sheet_unused_cells_stay_black() {
        // 1 tile on a 16-wide sheet: columns 1..15 of the tile row are
        // background, not uninitialized garbage.
        let data = marker_tile();
        let sheet = compose_sheet(&data, &default_colors(), 16, 1);
        assert_eq!(sheet.raster.get(8, 0), Rgb::BLACK);
        assert_eq!(sheet.raster.get(127, 7), Rgb::BLACK);
    }

    #[test]
    fn test_pixel_count_widens_past_u32() {
        // 2^17 * 2^15 pixels is exactly 2^32: the product must not wrap
        assert_eq!(pixel_count(1 << 17, 1 << 15), 1usize << 32);
        assert_eq!(pixel_count(u32::MAX, 2), u32::MAX as usize * 2);
    }

    #[test]
    fn test_empty_buffer_empty_sheet() {
        let sheet = compose_sheet(&[], &default_colors(), 16, 1);
        assert_eq!(sheet.tile_count, 0);
        assert_eq!(sheet.raster.height, 0);
        assert!(sheet.raster.pixels.is_empty());
    }
}
