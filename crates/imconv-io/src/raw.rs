//! Raw monochrome dump
//!
//! Writes one byte per pixel, taken from the red channel, with no header.
//! The format carries no dimensions and cannot be read back.

use crate::IoResult;
use imconv_core::{Image, channel_to_u8};
use log::debug;
use std::io::Write;

/// Write the red channel of every pixel as one byte, row-major.
///
/// # Arguments
/// * `image` - The image to dump
/// * `writer` - Destination writer
pub fn write_raw_mono<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    debug!(
        "writing {}x{} raw mono dump",
        image.width(),
        image.height()
    );

    let bytes: Vec<u8> = image
        .pixels()
        .iter()
        .map(|p| channel_to_u8(p.color.red))
        .collect();
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
