//! Image output.
//!
//! The native format is plain-text PPM (`P3`): a header with the size and
//! the maximum channel value, then one `r g b` line per pixel in row-major
//! order. Binary PPM (`P6`) and PNG are offered as conversions.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::Frame;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Plain-text PPM (`P3`)
    Ppm,
    /// Binary PPM (`P6`)
    PpmBinary,
    Png,
}

impl ImageFormat {
    /// Pick a format from the file extension; anything but `.png` is text PPM.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
            _ => ImageFormat::Ppm,
        }
    }
}

/// Write a frame as plain-text PPM.
pub fn write_ppm<W: Write>(frame: &Frame, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", frame.width, frame.height)?;
    writeln!(writer, "255")?;

    for color in &frame.pixels {
        writeln!(writer, "{} {} {}", color.r, color.g, color.b)?;
    }

    writer.flush()
}

/// Write a frame as binary PPM.
pub fn write_ppm_binary<W: Write>(frame: &Frame, mut writer: W) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", frame.width, frame.height)?;
    writer.write_all(frame.as_bytes())?;
    writer.flush()
}

/// Encode a frame as PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<(), OutputError> {
    image::save_buffer(
        path,
        frame.as_bytes(),
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
    )?;
    Ok(())
}

/// Write a frame to `path` in the given format.
pub fn save(frame: &Frame, path: &Path, format: ImageFormat) -> Result<(), OutputError> {
    match format {
        ImageFormat::Ppm => write_ppm(frame, BufWriter::new(File::create(path)?))?,
        ImageFormat::PpmBinary => write_ppm_binary(frame, BufWriter::new(File::create(path)?))?,
        ImageFormat::Png => save_png(frame, path)?,
    }
    log::info!("Saved {}x{} image to {}", frame.width, frame.height, path.display());
    Ok(())
}
