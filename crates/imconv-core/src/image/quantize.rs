//! Palette assignment
//!
//! Maps every pixel onto its nearest palette entry, recording the index on
//! the pixel and optionally replacing the color with the entry's.

use super::Image;
use crate::error::{Error, Result};
use crate::palette::Palette;
use log::debug;

/// Options for [`Image::quantize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Whether gray palette entries are candidates (default: true)
    pub include_grayscale: bool,
    /// Whether pixel colors are replaced by the matched entry (default: true)
    pub snap_to_palette: bool,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            include_grayscale: true,
            snap_to_palette: true,
        }
    }
}

impl Image {
    /// Assign every pixel its nearest palette index.
    ///
    /// Nearness is squared RGB distance with the first entry winning ties
    /// (see [`Palette::closest_color`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPaletteMatch`] if the palette has no candidate
    /// entries (empty, or only gray entries with `include_grayscale` off).
    /// The image is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use imconv_core::{Color, Image, Palette, QuantizeOptions};
    ///
    /// let palette = Palette::from_bytes(&[0, 0, 0, 255, 255, 255]).unwrap();
    /// let mut image = Image::new(2, 1).unwrap();
    /// image.pixel_at_mut(1, 0).unwrap().color = Color::gray(0.8);
    ///
    /// image.quantize(&palette, QuantizeOptions::default()).unwrap();
    /// assert_eq!(image.pixel_at(0, 0).unwrap().palette_index, Some(0));
    /// assert_eq!(image.pixel_at(1, 0).unwrap().color, Color::WHITE);
    /// ```
    pub fn quantize(&mut self, palette: &Palette, options: QuantizeOptions) -> Result<()> {
        debug!(
            "quantize: {}x{} onto {} palette entries",
            self.width,
            self.height,
            palette.len()
        );

        // Candidate set does not depend on the pixel, so one probe decides
        let has_candidates = palette
            .iter()
            .any(|c| options.include_grayscale || !c.is_gray());
        if !has_candidates {
            return Err(Error::NoPaletteMatch);
        }

        for pixel in &mut self.data {
            let found = palette
                .closest_color(&pixel.color, options.include_grayscale, None)
                .ok_or(Error::NoPaletteMatch)?;
            pixel.assign(found.index);
            if options.snap_to_palette {
                pixel.color = found.color;
            }
        }
        Ok(())
    }
}
