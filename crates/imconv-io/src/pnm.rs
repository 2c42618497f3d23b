//! PPM (binary P6) format support
//!
//! Reads and writes binary PPM. The reader accepts `#` comment lines and
//! runs of whitespace between header tokens. Files with `maxval <= 255`
//! carry one byte per sample; wider files carry two big-endian bytes per
//! sample, of which only the high byte is kept. The writer always emits
//! `maxval` 255 and never writes comments.

use crate::format::detect_format_from_bytes;
use crate::{IoError, IoResult};
use imconv_core::{Image, IngestOptions, NUM_CHANNELS, RawLayout};
use log::{debug, warn};
use std::io::{BufRead, ErrorKind, Read, Write};

/// Largest sample value a PPM file may declare
const MAX_MAXVAL: u32 = 65535;

/// Header fields of a binary PPM file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Largest sample value (1..=65535)
    pub maxval: u32,
}

impl PpmHeader {
    /// Bytes used by one channel sample.
    pub fn bytes_per_sample(&self) -> usize {
        if self.maxval > 255 { 2 } else { 1 }
    }

    /// Size of the pixel data that follows the header, or `None` if it
    /// overflows `usize`.
    pub fn data_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(NUM_CHANNELS * self.bytes_per_sample())
    }

    /// Layout of the pixel data, keeping the high byte of wide samples.
    fn layout(&self) -> RawLayout {
        let bps = self.bytes_per_sample();
        RawLayout {
            bytes_per_row: self.width as usize * NUM_CHANNELS * bps,
            bytes_per_pixel: NUM_CHANNELS * bps,
            red: 0,
            green: bps,
            blue: 2 * bps,
        }
    }
}

/// Read the PPM header and leave `reader` positioned at the pixel data.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the magic is not `P6`
/// - [`IoError::InvalidData`] for missing or malformed tokens, zero
///   dimensions, or a maxval outside `1..=65535`
pub fn read_ppm_header<R: BufRead>(mut reader: R) -> IoResult<PpmHeader> {
    let mut magic = [0u8; 2];
    reader.read_exact(&mut magic).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => IoError::InvalidData("missing PPM magic".to_string()),
        _ => IoError::Io(e),
    })?;
    detect_format_from_bytes(&magic)?;

    let width = read_header_value(&mut reader, "width")?;
    let height = read_header_value(&mut reader, "height")?;
    let maxval = read_header_value(&mut reader, "maxval")?;

    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "invalid dimensions {width}x{height}"
        )));
    }
    if maxval == 0 || maxval > MAX_MAXVAL {
        return Err(IoError::InvalidData(format!("invalid maxval {maxval}")));
    }

    let header = PpmHeader {
        width,
        height,
        maxval,
    };
    debug!("PPM header: {header:?}");
    Ok(header)
}

/// Read a binary PPM image from a reader.
///
/// Samples are taken as stored (not rescaled by maxval) and ingested
/// through [`Image::from_raw`] with the given options.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P6` magic
/// * `options` - Ingestion options (saturation boost)
///
/// # Errors
///
/// Header errors as in [`read_ppm_header`]; [`IoError::DecodeError`] if the
/// pixel data is truncated; [`IoError::Core`] if the options are invalid.
pub fn read_ppm<R: BufRead>(mut reader: R, options: IngestOptions) -> IoResult<Image> {
    options.validate()?;
    let header = read_ppm_header(&mut reader)?;

    let len = header.data_len().ok_or_else(|| {
        IoError::InvalidData(format!(
            "{}x{} image is too large",
            header.width, header.height
        ))
    })?;

    // Grow with the bytes actually present rather than the declared size
    let mut data = Vec::new();
    (&mut reader).take(len as u64).read_to_end(&mut data)?;
    if data.len() < len {
        return Err(IoError::DecodeError(format!(
            "truncated pixel data: expected {len} bytes, got {}",
            data.len()
        )));
    }

    if header.bytes_per_sample() > 1 {
        warn!(
            "PPM maxval {} exceeds 255; keeping the high byte of each sample",
            header.maxval
        );
    }

    let image = Image::from_raw(header.width, header.height, &data, header.layout(), options)?;
    Ok(image)
}

/// Write an image as binary PPM.
///
/// Emits the header `P6 {width} {height} 255\n` followed by one byte per
/// channel, each channel clamped to `[0, 1]`, scaled by 255 and rounded.
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let (width, height) = image.dimensions();
    debug!("writing {width}x{height} PPM");

    writeln!(writer, "P6 {width} {height} 255")?;

    let mut row_buf = Vec::with_capacity(width as usize * NUM_CHANNELS);
    for row in image.pixels().chunks_exact(width as usize) {
        row_buf.clear();
        for p in row {
            let (r, g, b) = p.color.to_u8();
            row_buf.extend_from_slice(&[r, g, b]);
        }
        writer.write_all(&row_buf)?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse one decimal header token, skipping whitespace and comment lines.
///
/// The token is terminated by exactly one whitespace byte, which is
/// consumed; after the maxval this is the separator before the pixel data.
fn read_header_value<R: BufRead>(reader: &mut R, name: &str) -> IoResult<u32> {
    let missing = || IoError::InvalidData(format!("PPM header ends before {name}"));

    let first = loop {
        let byte = next_byte(reader)?.ok_or_else(missing)?;
        match byte {
            b'#' => skip_line(reader)?,
            b if b.is_ascii_whitespace() => {}
            b => break b,
        }
    };

    let mut value: u32 = 0;
    let mut byte = Some(first);
    while let Some(b) = byte {
        if b.is_ascii_whitespace() {
            break;
        }
        if !b.is_ascii_digit() {
            return Err(IoError::InvalidData(format!(
                "unexpected byte 0x{b:02x} in PPM {name}"
            )));
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or_else(|| IoError::InvalidData(format!("PPM {name} is too large")))?;
        byte = next_byte(reader)?;
    }

    Ok(value)
}

/// Consume bytes through the next newline (or end of input).
fn skip_line<R: BufRead>(reader: &mut R) -> IoResult<()> {
    let mut discarded = Vec::new();
    reader.read_until(b'\n', &mut discarded)?;
    Ok(())
}

fn next_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let byte = match reader.fill_buf()?.first() {
        Some(&b) => b,
        None => return Ok(None),
    };
    reader.consume(1);
    Ok(Some(byte))
}
