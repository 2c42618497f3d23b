//! imconv I/O - Image file encoding and decoding
//!
//! Supported formats (each behind a feature flag, all on by default):
//!
//! - `pnm`: binary PPM (P6), read and write
//! - `raw`: headerless monochrome dump of the red channel, write only
//!
//! Decoding always goes through [`imconv_core::Image::from_raw`], so the
//! caller's [`IngestOptions`] (saturation boost) apply to every read.
//!
//! # Examples
//!
//! ```
//! use imconv_core::{Color, Image, IngestOptions};
//! use imconv_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let mut image = Image::new(2, 2).unwrap();
//! image.pixel_at_mut(0, 0).unwrap().color = Color::WHITE;
//!
//! let bytes = write_image_mem(&image, ImageFormat::Ppm).unwrap();
//! let decoded = read_image_mem(&bytes, IngestOptions::default()).unwrap();
//! assert_eq!(decoded, image);
//! ```

mod error;
pub mod format;
#[cfg(feature = "pnm")]
pub mod pnm;
#[cfg(feature = "raw")]
pub mod raw;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
#[cfg(feature = "pnm")]
pub use pnm::{PpmHeader, read_ppm, read_ppm_header, write_ppm};
#[cfg(feature = "raw")]
pub use raw::write_raw_mono;

use imconv_core::{Image, IngestOptions};
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Image file formats known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Binary PPM (P6)
    Ppm,
    /// Headerless one-byte-per-pixel dump of the red channel
    RawMono,
}

impl ImageFormat {
    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Ppm => "ppm",
            ImageFormat::RawMono => "raw",
        }
    }

    /// Whether files of this format can be decoded.
    pub fn is_readable(self) -> bool {
        matches!(self, ImageFormat::Ppm)
    }
}

/// Read an image from a file path.
///
/// The file is opened before anything is parsed, so a missing or
/// unreadable file fails immediately with [`IoError::Io`].
///
/// # Arguments
/// * `path` - File to read
/// * `options` - Ingestion options (saturation boost)
pub fn read_image<P: AsRef<Path>>(path: P, options: IngestOptions) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path).map_err(IoError::Io)?;
    debug!("reading image from {}", path.display());
    read_image_format(BufReader::new(file), options)
}

/// Read an image from encoded bytes in memory.
pub fn read_image_mem(data: &[u8], options: IngestOptions) -> IoResult<Image> {
    detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), options)
}

#[cfg(feature = "pnm")]
fn read_image_format<R: std::io::BufRead>(reader: R, options: IngestOptions) -> IoResult<Image> {
    read_ppm(reader, options)
}

#[cfg(not(feature = "pnm"))]
fn read_image_format<R: std::io::BufRead>(_reader: R, _options: IngestOptions) -> IoResult<Image> {
    Err(IoError::UnsupportedFormat(
        "PPM support not enabled".to_string(),
    ))
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(IoError::Io)?;
    debug!("writing {:?} image to {}", format, path.display());
    let mut writer = BufWriter::new(file);
    write_image_format(image, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into a byte vector in the given format.
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(image, &mut buffer, format)?;
    Ok(buffer)
}

/// Dispatch an encode to the format's writer.
fn write_image_format<W: Write>(image: &Image, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Ppm => write_ppm(image, writer),
        #[cfg(feature = "raw")]
        ImageFormat::RawMono => write_raw_mono(image, writer),
        #[allow(unreachable_patterns)]
        _ => {
            let _ = (image, writer);
            Err(IoError::UnsupportedFormat(format!(
                "{format:?} support not enabled"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imconv_core::Color;

    #[test]
    fn test_extension() {
        assert_eq!(ImageFormat::Ppm.extension(), "ppm");
        assert_eq!(ImageFormat::RawMono.extension(), "raw");
        assert!(ImageFormat::Ppm.is_readable());
        assert!(!ImageFormat::RawMono.is_readable());
    }

    #[test]
    fn test_read_missing_file_fails_fast() {
        let err = read_image("/nonexistent/imconv/input.ppm", IngestOptions::default());
        assert!(matches!(err, Err(IoError::Io(_))));
    }

    #[test]
    fn test_read_mem_rejects_unknown() {
        assert!(matches!(
            read_image_mem(b"GIF89a", IngestOptions::default()),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_mem_dispatch() {
        let mut image = Image::new(2, 1).unwrap();
        image.pixel_at_mut(1, 0).unwrap().color = Color::new(1.0, 0.5, 0.0);

        let ppm = write_image_mem(&image, ImageFormat::Ppm).unwrap();
        assert!(ppm.starts_with(b"P6 2 1 255\n"));
        assert_eq!(ppm.len(), 11 + 6);

        let raw = write_image_mem(&image, ImageFormat::RawMono).unwrap();
        assert_eq!(raw, vec![0, 255]);
    }
}
