//! Encoders for rendered pixel grids.
//!
//! - Symbol grid: one character per pixel, for terminals
//! - Plain PPM (`P3`) with a configurable maximum channel value
//! - Binary PPM (`P6`), one byte per channel
//! - PNG via the `image` crate

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

use crate::{Color, Pixel, PixelGrid};

/// Maximum channel value written in PPM headers by default.
pub const DEFAULT_PPM_MAX: u32 = 100;

/// Channel value at or above which a channel counts as lit.
pub const DEFAULT_SYMBOL_THRESHOLD: f64 = 0.5;

/// Symbol printed for background pixels.
pub const BACKGROUND_SYMBOL: char = '.';

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Binary PPM max value must be in 1..=255, got {0}")]
    InvalidMaxValue(u32),
}

/// Map a color to a single letter.
///
/// Each channel is lit when `>= threshold`. Red is decided first, then
/// green, then blue:
///
/// | lit     | symbol |
/// |---------|--------|
/// | R G B   | `W`    |
/// | R G     | `M`    |
/// | R   B   | `V`    |
/// | R       | `R`    |
/// |   G B   | `Y`    |
/// |   G     | `G`    |
/// |     B   | `B`    |
/// | none    | `K`    |
pub fn color_symbol(color: Color, threshold: f64) -> char {
    let r = color.x >= threshold;
    let g = color.y >= threshold;
    let b = color.z >= threshold;

    match (r, g, b) {
        (true, true, true) => 'W',
        (true, true, false) => 'M',
        (true, false, true) => 'V',
        (true, false, false) => 'R',
        (false, true, true) => 'Y',
        (false, true, false) => 'G',
        (false, false, true) => 'B',
        (false, false, false) => 'K',
    }
}

/// Symbol for a pixel; background maps to [`BACKGROUND_SYMBOL`].
pub fn pixel_symbol(pixel: Pixel, threshold: f64) -> char {
    match pixel {
        Pixel::Background => BACKGROUND_SYMBOL,
        Pixel::Hit(color) => color_symbol(color, threshold),
    }
}

/// Render the grid as text, one line per row, top row first.
pub fn to_symbol_grid(grid: &PixelGrid, threshold: f64) -> String {
    let mut text = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);
    for row in grid.rows() {
        text.extend(row.iter().map(|p| pixel_symbol(*p, threshold)));
        text.push('\n');
    }
    text
}

/// Scale a channel to `[0, max]`, clamping out-of-range colors.
#[inline]
fn quantize(channel: f64, max: u32) -> u32 {
    (channel.clamp(0.0, 1.0) * max as f64).round() as u32
}

fn pixel_rgb(pixel: Pixel, max: u32) -> [u32; 3] {
    match pixel {
        Pixel::Background => [0, 0, 0],
        Pixel::Hit(c) => [quantize(c.x, max), quantize(c.y, max), quantize(c.z, max)],
    }
}

/// Write the grid as a plain-text PPM (`P3`) image.
///
/// Each row is written on its own line. Background pixels are black.
pub fn write_ppm<W: Write>(grid: &PixelGrid, writer: &mut W, max_value: u32) -> Result<(), OutputError> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", grid.width(), grid.height())?;
    writeln!(writer, "{}", max_value)?;

    for row in grid.rows() {
        for pixel in row {
            let [r, g, b] = pixel_rgb(*pixel, max_value);
            write!(writer, "{:2} {:2} {:2}   ", r, g, b)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the grid as a binary PPM (`P6`) image.
///
/// Pixels follow the header as raw `r g b` bytes, row-major, top row first.
/// `max_value` must fit in a byte.
pub fn write_ppm_binary<W: Write>(
    grid: &PixelGrid,
    writer: &mut W,
    max_value: u32,
) -> Result<(), OutputError> {
    if max_value == 0 || max_value > 255 {
        return Err(OutputError::InvalidMaxValue(max_value));
    }

    write!(writer, "P6\n{} {}\n{}\n", grid.width(), grid.height(), max_value)?;

    let bytes: Vec<u8> = grid
        .pixels()
        .iter()
        .flat_map(|pixel| pixel_rgb(*pixel, max_value))
        .map(|channel| channel as u8)
        .collect();
    writer.write_all(&bytes)?;

    writer.flush()?;
    Ok(())
}

/// Convert the grid to an 8-bit RGB image. Background pixels are black.
pub fn to_rgb_image(grid: &PixelGrid) -> RgbImage {
    RgbImage::from_fn(grid.width(), grid.height(), |x, y| {
        let [r, g, b] = pixel_rgb(grid.get(x, y), 255);
        Rgb([r as u8, g as u8, b as u8])
    })
}

/// Save the grid as a PNG file.
pub fn save_png<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    to_rgb_image(grid).write_to(&mut writer, image::ImageFormat::Png)?;
    writer.flush()?;

    log::info!("Saved {}x{} PNG to {}", grid.width(), grid.height(), path.display());
    Ok(())
}
