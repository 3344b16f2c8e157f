//! `chrdump` - extract and render NES CHR (2bpp planar) tile graphics.
//!
//! Two subcommands: `convert` renders a raw CHR dump to a PNG tile sheet,
//! `extract` copies a flat byte range (optionally addressed by PRG bank) out
//! of a ROM image. Decoding lives in `chr_core`; this binary is argument
//! parsing, file I/O and reporting.

mod image;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use chr_core::palette;
use chr_core::raster::compose_sheet;
use chr_core::rom;

#[derive(Parser)]
#[command(name = "chrdump", about = "NES CHR tile graphics extractor")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render raw CHR data to a PNG tile sheet
    Convert {
        /// Input CHR file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Four comma-separated NES color-table indices (hex or decimal)
        #[arg(short, long, default_value = "0x0f,0x20,0x28,0x30")]
        palette: String,

        /// Tiles per sheet row
        #[arg(short, long, default_value_t = 16)]
        tiles_per_row: u32,

        /// Integer scale factor for each tile
        #[arg(short, long, default_value_t = 1)]
        scale: u32,
    },

    /// Copy a byte range out of a ROM image
    Extract {
        /// Path to the ROM file
        #[arg(short, long)]
        rom: PathBuf,

        /// PRG bank number (16 KiB banks after the iNES header)
        #[arg(short, long)]
        bank: Option<usize>,

        /// Direct byte offset (hex or decimal); takes precedence over --bank
        #[arg(short, long, value_parser = parse_int)]
        address: Option<usize>,

        /// Number of bytes to copy
        #[arg(short, long, default_value = "8192", value_parser = parse_int)]
        size: usize,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Parse an integer the way Python's `int(x, 0)` does: `0x` prefix means hex,
/// otherwise decimal.
fn parse_int(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        usize::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|_| format!("invalid integer: {s:?}"))
}

/// Parse the `--palette` argument into 4 color-table indices. Values are
/// masked to 6 bits, matching the master-palette lookup.
fn parse_palette(list: &str) -> Result<[u8; 4]> {
    let values: Vec<usize> = list
        .split(',')
        .map(|part| parse_int(part).map_err(anyhow::Error::msg))
        .collect::<Result<_>>()?;
    if values.len() != 4 {
        bail!(
            "palette must have exactly 4 entries, got {}: {list:?}",
            values.len()
        );
    }
    let mut indices = [0u8; 4];
    for (slot, &v) in indices.iter_mut().zip(&values) {
        *slot = (v & 0x3f) as u8;
    }
    Ok(indices)
}

fn run_convert(
    input: &Path,
    output: &Path,
    palette_arg: &str,
    tiles_per_row: u32,
    scale: u32,
) -> Result<()> {
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }
    if tiles_per_row < 1 {
        bail!("tiles-per-row must be at least 1");
    }
    if scale < 1 {
        bail!("scale must be at least 1");
    }

    let indices = parse_palette(palette_arg)?;
    let colors = palette::resolve(&indices);
    let colors = [colors[0], colors[1], colors[2], colors[3]];

    let data = fs::read(input).with_context(|| format!("reading {}", input.display()))?;

    let sheet = compose_sheet(&data, &colors, tiles_per_row, scale);
    if sheet.dropped_bytes > 0 {
        log::warn!(
            "CHR data length {} is not a multiple of 16; dropping {} trailing byte(s)",
            data.len(),
            sheet.dropped_bytes
        );
    }
    if sheet.tile_count == 0 {
        bail!("no complete tiles in {}", input.display());
    }

    log::info!("converting {} tiles", sheet.tile_count);
    image::write_png(output, &sheet.raster)
        .with_context(|| format!("writing {}", output.display()))?;

    println!("Saved tile sheet to {}", output.display());
    println!("Dimensions: {}x{}", sheet.raster.width, sheet.raster.height);
    Ok(())
}

fn run_extract(
    rom_path: &Path,
    bank: Option<usize>,
    address: Option<usize>,
    size: usize,
    output: &Path,
) -> Result<()> {
    if !rom_path.exists() {
        bail!("ROM file not found: {}", rom_path.display());
    }

    let offset = match (address, bank) {
        (Some(addr), _) => addr,
        (None, Some(bank)) => rom::prg_bank_address(bank),
        (None, None) => bail!("must specify either --bank or --address"),
    };

    let rom_data = fs::read(rom_path).with_context(|| format!("reading {}", rom_path.display()))?;

    log::info!("extracting {size} bytes from offset {offset:#x}");
    let chunk = rom::read_range(&rom_data, offset, size)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(output, chunk).with_context(|| format!("writing {}", output.display()))?;

    println!("Extracted {} bytes to {}", chunk.len(), output.display());
    println!("This represents {} tiles (8x8)", chr_core::tile::tile_count(chunk.len()));
    Ok(())
}

fn main() -> Result<()> {
    // Truncation warnings must reach the user even without RUST_LOG set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match args.command {
        Command::Convert {
            input,
            output,
            palette,
            tiles_per_row,
            scale,
        } => run_convert(&input, &output, &palette, tiles_per_row, scale),
        Command::Extract {
            rom,
            bank,
            address,
            size,
            output,
        } => run_extract(&rom, bank, address, size, &output),
    }
}
