//! Raw-buffer ingestion and saturation boost
//!
//! Ingestion is two explicit steps:
//!
//! 1. [`Image::from_raw_unboosted`] reads 8-bit samples through a
//!    [`RawLayout`] and normalizes them to `[0, 1]`;
//! 2. [`Image::apply_saturation_boost`] amplifies each pixel's chromatic
//!    residual relative to its achromatic floor.
//!
//! [`Image::from_raw`] runs both with the factor from [`IngestOptions`].

use super::Image;
use crate::color::{Color, NUM_CHANNELS};
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use log::debug;

/// Saturation boost used when none is configured (identity transform)
pub const DEFAULT_BOOST: f32 = 1.0;

/// Options applied when turning raw bytes into an [`Image`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngestOptions {
    /// Saturation boost factor; must be finite and greater than zero
    pub boost: f32,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            boost: DEFAULT_BOOST,
        }
    }
}

impl IngestOptions {
    /// Options with the given boost factor.
    pub fn with_boost(boost: f32) -> Self {
        Self { boost }
    }

    /// Check that the options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `boost` is not finite or not
    /// strictly positive.
    pub fn validate(&self) -> Result<()> {
        validate_boost(self.boost)
    }
}

fn validate_boost(boost: f32) -> Result<()> {
    if !boost.is_finite() || boost <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "saturation boost must be finite and > 0, got {boost}"
        )));
    }
    Ok(())
}

/// Byte layout of an interleaved 8-bit source buffer
///
/// Pixel (x, y) starts at `y * bytes_per_row + x * bytes_per_pixel`; its
/// channels are read from the offsets `red`, `green` and `blue` relative to
/// that start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLayout {
    /// Distance in bytes between the starts of consecutive rows
    pub bytes_per_row: usize,
    /// Distance in bytes between the starts of consecutive pixels
    pub bytes_per_pixel: usize,
    /// Offset of the red sample within a pixel
    pub red: usize,
    /// Offset of the green sample within a pixel
    pub green: usize,
    /// Offset of the blue sample within a pixel
    pub blue: usize,
}

impl RawLayout {
    /// Tightly packed RGB, three bytes per pixel.
    pub fn rgb(width: u32) -> Self {
        Self {
            bytes_per_row: width as usize * NUM_CHANNELS,
            bytes_per_pixel: NUM_CHANNELS,
            red: 0,
            green: 1,
            blue: 2,
        }
    }

    /// Strided source with channels stored in blue, green, red order
    /// (e.g. BGRA framebuffers).
    pub fn bgr_strided(bytes_per_row: usize, bytes_per_pixel: usize) -> Self {
        Self {
            bytes_per_row,
            bytes_per_pixel,
            red: 2,
            green: 1,
            blue: 0,
        }
    }

    /// Number of bytes a `width x height` image needs under this layout,
    /// or `None` if that size does not fit in `usize`.
    fn required_len(&self, width: u32, height: u32) -> Option<usize> {
        let last_channel = self.red.max(self.green).max(self.blue);
        let rows = (height as usize - 1).checked_mul(self.bytes_per_row)?;
        let cols = (width as usize - 1).checked_mul(self.bytes_per_pixel)?;
        rows.checked_add(cols)?.checked_add(last_channel)?.checked_add(1)
    }

    fn validate(&self) -> Result<()> {
        let last_channel = self.red.max(self.green).max(self.blue);
        if last_channel >= self.bytes_per_pixel {
            return Err(Error::InvalidParameter(format!(
                "channel offset {last_channel} outside {}-byte pixel",
                self.bytes_per_pixel
            )));
        }
        Ok(())
    }
}

impl Image {
    /// Create an image from raw 8-bit samples and apply the saturation boost.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `bytes` - Source buffer
    /// * `layout` - Row stride, pixel stride and channel offsets
    /// * `options` - Ingestion options (boost factor)
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero, the layout is
    /// inconsistent, the buffer is too short, or the boost is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use imconv_core::{Color, Image, IngestOptions, RawLayout};
    ///
    /// let bytes = [255, 0, 0, 0, 0, 255];
    /// let image =
    ///     Image::from_raw(2, 1, &bytes, RawLayout::rgb(2), IngestOptions::default()).unwrap();
    /// assert_eq!(image.pixel_at(1, 0).unwrap().color, Color::new(0.0, 0.0, 1.0));
    /// ```
    pub fn from_raw(
        width: u32,
        height: u32,
        bytes: &[u8],
        layout: RawLayout,
        options: IngestOptions,
    ) -> Result<Self> {
        options.validate()?;
        let mut image = Self::from_raw_unboosted(width, height, bytes, layout)?;
        image.apply_saturation_boost(options.boost)?;
        Ok(image)
    }

    /// Create an image from raw 8-bit samples without boosting.
    ///
    /// Each sample is divided by 255.
    pub fn from_raw_unboosted(
        width: u32,
        height: u32,
        bytes: &[u8],
        layout: RawLayout,
    ) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        layout.validate()?;

        let required = layout.required_len(width, height).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "{width}x{height} raw layout size overflows ({layout:?})"
            ))
        })?;
        if bytes.len() < required {
            return Err(Error::InvalidParameter(format!(
                "raw buffer holds {} bytes, {}x{} layout needs {}",
                bytes.len(),
                width,
                height,
                required
            )));
        }

        debug!("ingesting {width}x{height} raw image ({layout:?})");

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as usize {
            let row = &bytes[y * layout.bytes_per_row..];
            for x in 0..width as usize {
                let px = &row[x * layout.bytes_per_pixel..];
                let color = Color::from_u8(px[layout.red], px[layout.green], px[layout.blue]);
                data.push(Pixel::new(color));
            }
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    /// Amplify the chromatic part of every pixel.
    ///
    /// For each pixel with minimum channel `min`, every channel becomes
    /// `(value - min) * boost + min / boost`, capped at `1.0`. A boost of
    /// `1.0` leaves colors unchanged. For positive boosts and non-negative
    /// inputs the result is never negative, so no lower clamp is applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `boost` is not finite or not
    /// strictly positive.
    pub fn apply_saturation_boost(&mut self, boost: f32) -> Result<()> {
        validate_boost(boost)?;
        debug!(
            "applying saturation boost {boost} to {}x{} image",
            self.width, self.height
        );

        for p in &mut self.data {
            p.color = boost_color(&p.color, boost);
        }
        Ok(())
    }
}

/// Saturation boost of a single color.
pub(crate) fn boost_color(color: &Color, boost: f32) -> Color {
    let min = color.min_channel();
    let floor = min / boost;
    let apply = |v: f32| ((v - min) * boost + floor).min(1.0);
    Color::new(apply(color.red), apply(color.green), apply(color.blue))
}
