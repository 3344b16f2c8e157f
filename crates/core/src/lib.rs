//! Core primitives for decoding NES CHR (2bpp planar) tile graphics.
//!
//! The pipeline is purely functional: raw bytes are decoded into 8x8 grids of
//! 2-bit color indices ([`tile`]), indices are resolved against the fixed
//! 64-entry master palette ([`palette`]), and decoded tiles are rendered and
//! arranged into a single sheet raster ([`raster`]). Byte extraction from a
//! larger ROM image is a flat range read with optional PRG-bank arithmetic
//! ([`rom`]).
//!
//! No I/O happens in this crate; callers read the source bytes up front and
//! persist the finished raster themselves.

pub mod palette;
pub mod raster;
pub mod rom;
pub mod tile;

pub use palette::{Rgb, DEFAULT_PALETTE};
pub use raster::{Raster, TileSheet};
pub use tile::TILE_BYTES;
