//! Flat byte-range access into a ROM image.
//!
//! No ROM structure is parsed here; a ROM is just a byte buffer and the only
//! operations are bounds-checked slicing and the iNES PRG-bank address
//! formula. Which bank holds which graphics is game-specific knowledge that
//! stays with the caller.

use thiserror::Error;

/// iNES header length preceding PRG-ROM data.
pub const INES_HEADER_SIZE: usize = 16;

/// PRG bank size (16 KiB).
pub const PRG_BANK_SIZE: usize = 0x4000;

/// Typical CHR bank size (8 KiB), the default extraction length.
pub const CHR_BANK_SIZE: usize = 8192;

#[derive(Debug, Error)]
pub enum RomError {
    #[error("requested range {offset:#x}+{len} exceeds ROM size {available}")]
    OutOfRange {
        offset: usize,
        len: usize,
        available: usize,
    },
}

/// Return the slice `[offset, offset + len)` of `data`.
pub fn read_range(data: &[u8], offset: usize, len: usize) -> Result<&[u8], RomError> {
    let end = offset.checked_add(len).ok_or(RomError::OutOfRange {
        offset,
        len,
        available: data.len(),
    })?;
    if end > data.len() {
        return Err(RomError::OutOfRange {
            offset,
            len,
            available: data.len(),
        });
    }
    Ok(&data[offset..end])
}

/// ROM file offset of a 16 KiB PRG bank: header size + bank * bank size.
pub fn prg_bank_address(bank: usize) -> usize {
    INES_HEADER_SIZE + bank * PRG_BANK_SIZE
}
