//! Image - Grid of normalized RGB pixels
//!
//! An [`Image`] exclusively owns a `width * height` grid of [`Pixel`]s in
//! one contiguous buffer, row-major with the origin at the top-left.
//! Images never share pixel storage; every cross-image operation copies.
//!
//! # Construction
//!
//! - [`Image::new`] - zeroed grid
//! - [`Image::from_raw`] - 8-bit interleaved bytes with an arbitrary
//!   [`RawLayout`], normalized and saturation-boosted
//! - [`Image::resample`] - nearest-neighbor resize of another image
//! - [`Image::crop`] - copy of a sub-region of another image
//! - `Clone` - verbatim copy
//!
//! Decoding from files lives in the `imconv-io` crate.

mod clip;
mod compare;
mod histogram;
mod ingest;
mod quantize;
mod scale;
mod statistics;

pub use histogram::{ColorHistogram, ColorRank};
pub use ingest::{DEFAULT_BOOST, IngestOptions, RawLayout};
pub use quantize::QuantizeOptions;

use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Grid of pixels
///
/// # Examples
///
/// ```
/// use imconv_core::{Color, Image};
///
/// let mut image = Image::new(4, 3).unwrap();
/// assert_eq!(image.dimensions(), (4, 3));
///
/// image.pixel_at_mut(1, 2).unwrap().color = Color::WHITE;
/// assert_eq!(image.pixel_at(1, 2).unwrap().color, Color::WHITE);
/// assert!(image.pixel_at(4, 0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<Pixel>,
}

impl Image {
    /// Create a new image with all pixels black and unassigned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;

        let size = (width as usize) * (height as usize);
        Ok(Image {
            width,
            height,
            data: vec![Pixel::default(); size],
        })
    }

    /// Create an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        Self::check_dimensions(width, height)?;

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    fn check_dimensions(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(())
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether two images have the same width and height.
    #[inline]
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Get the pixel data in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Get mutable pixel data in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Get one row of pixels, or `None` if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> Option<&[Pixel]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = (y as usize) * width;
        self.data.get(start..start + width)
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are outside the grid.
    #[inline]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<&Pixel> {
        let idx = self.index_of(x, y)?;
        self.data.get(idx)
    }

    /// Get the pixel at (x, y) for modification.
    ///
    /// Returns `None` if the coordinates are outside the grid.
    #[inline]
    pub fn pixel_at_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
        let idx = self.index_of(x, y)?;
        self.data.get_mut(idx)
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Forget every palette assignment.
    pub fn clear_palette_indices(&mut self) {
        for p in &mut self.data {
            p.palette_index = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_image_creation() {
        let image = Image::new(5, 7).unwrap();
        assert_eq!(image.width(), 5);
        assert_eq!(image.height(), 7);
        assert_eq!(image.pixel_count(), 35);
        assert!(image.pixels().iter().all(|p| *p == Pixel::default()));
    }

    #[test]
    fn test_image_creation_invalid() {
        assert_eq!(
            Image::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        );
        assert!(Image::new(10, 0).is_err());
    }

    #[test]
    fn test_from_pixels_length_check() {
        let data = vec![Pixel::default(); 6];
        assert!(Image::from_pixels(2, 3, data.clone()).is_ok());
        assert!(Image::from_pixels(3, 3, data).is_err());
    }

    #[test]
    fn test_pixel_at_bounds() {
        let mut image = Image::new(3, 2).unwrap();
        assert!(image.pixel_at(2, 1).is_some());
        assert!(image.pixel_at(3, 1).is_none());
        assert!(image.pixel_at(2, 2).is_none());
        assert!(image.pixel_at_mut(u32::MAX, 0).is_none());
    }

    #[test]
    fn test_row_major_layout() {
        let mut image = Image::new(3, 2).unwrap();
        image.pixel_at_mut(2, 1).unwrap().color = Color::WHITE;
        assert_eq!(image.pixels()[5].color, Color::WHITE);
        assert_eq!(image.row(1).unwrap()[2].color, Color::WHITE);
        assert_eq!(image.row(0).unwrap().len(), 3);
    }

    #[test]
    fn test_row_out_of_range() {
        let image = Image::new(2, 2).unwrap();
        assert!(image.row(1).is_some());
        assert!(image.row(2).is_none());
        assert!(image.row(u32::MAX).is_none());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Image::new(2, 2).unwrap();
        a.pixel_at_mut(0, 0).unwrap().color = Color::new(0.1, 0.2, 0.3);
        let mut b = a.clone();
        b.pixel_at_mut(0, 0).unwrap().color = Color::BLACK;
        assert_eq!(a.pixel_at(0, 0).unwrap().color, Color::new(0.1, 0.2, 0.3));
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_clear_palette_indices() {
        let mut image = Image::new(2, 1).unwrap();
        image.pixel_at_mut(0, 0).unwrap().assign(3);
        image.clear_palette_indices();
        assert!(image.pixels().iter().all(|p| p.palette_index.is_none()));
    }
}
