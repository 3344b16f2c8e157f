//! Lossless PNG output for composed rasters.

use anyhow::{Context, Result};
use chr_core::Raster;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Write a raster to `path` as an 8-bit RGB PNG, creating intermediate
/// directories as needed.
pub fn write_png(path: &Path, raster: &Raster) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), raster.width, raster.height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().context("writing PNG header")?;
    writer
        .write_image_data(&raster.to_rgb_bytes())
        .context("writing PNG image data")?;
    Ok(())
}
