//! NES 2bpp planar tile decoding.
//!
//! Each 8x8 tile is stored in 16 bytes:
//! - Bytes 0-7: Low bitplane (one bit per pixel for 8 rows)
//! - Bytes 8-15: High bitplane (one bit per pixel for 8 rows)
//!
//! Within a row byte, bit 7 is the leftmost pixel. The two planes combine to
//! a 2-bit color index per pixel: `(high << 1) | low`, giving values 0-3.

/// Size of one encoded tile in bytes.
pub const TILE_BYTES: usize = 16;

/// Tile edge length in pixels.
pub const TILE_DIM: usize = 8;

/// Decoded 8x8 grid of 2-bit color indices, `[row][col]`, each value 0-3.
pub type TileIndices = [[u8; TILE_DIM]; TILE_DIM];

/// Decode a single tile out of a CHR buffer.
///
/// `tile_index` is zero-based in buffer order. The caller must guarantee
/// `data.len() >= (tile_index + 1) * TILE_BYTES`; use [`tile_count`] to stay
/// within the complete-tile prefix.
pub fn decode_tile(data: &[u8], tile_index: usize) -> TileIndices {
    let offset = tile_index * TILE_BYTES;
    let low = &data[offset..offset + 8];
    let high = &data[offset + 8..offset + 16];

    let mut pixels = [[0u8; TILE_DIM]; TILE_DIM];
    for (y, row) in pixels.iter_mut().enumerate() {
        let lo = low[y];
        let hi = high[y];
        for (x, px) in row.iter_mut().enumerate() {
            let bit = 7 - x;
            let lo_bit = (lo >> bit) & 1;
            let hi_bit = (hi >> bit) & 1;
            *px = (hi_bit << 1) | lo_bit;
        }
    }
    pixels
}

/// Number of complete tiles in a buffer of `len` bytes.
pub fn tile_count(len: usize) -> usize {
    len / TILE_BYTES
}

/// Bytes left over after the last complete tile. Non-zero means the buffer
/// ends in a partial record, which decoding silently drops.
pub fn trailing_bytes(len: usize) -> usize {
    len % TILE_BYTES
}
