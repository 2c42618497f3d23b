//! Perceptual difference between two images
//!
//! Each pixel pair is split into gray floor and chromatic residual (see
//! [`Color::gray_and_color_components`]). Chromatic mismatch is weighted
//! more heavily than gray mismatch.

use super::Image;
use crate::color::Color;
use crate::error::{Error, Result};

/// Weight of the summed chromatic residual error
const COLOR_ERROR_WEIGHT: f32 = 1.4;

/// Weight of the summed gray error
const GRAY_ERROR_WEIGHT: f32 = 0.6;

impl Image {
    /// Weighted perceptual error between this image and `other`.
    ///
    /// For every pixel pair the squared difference of the chromatic
    /// residuals is added to the color error, and three times the squared
    /// difference of the gray scalars (the gray triple has three equal
    /// channels) to the gray error. The score is
    /// `1.4 * color_error + 0.6 * gray_error`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in size.
    pub fn error_from_image(&self, other: &Image) -> Result<f32> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }

        let mut color_error = 0.0f32;
        let mut gray_error = 0.0f32;
        for (a, b) in self.data.iter().zip(&other.data) {
            let (ca, cb) = (a.color, b.color);
            color_error += chroma_error(&ca, &cb);
            gray_error += gray_difference(&ca, &cb);
        }

        Ok(COLOR_ERROR_WEIGHT * color_error + GRAY_ERROR_WEIGHT * gray_error)
    }
}

fn chroma_error(a: &Color, b: &Color) -> f32 {
    let (_, ca) = a.gray_and_color_components();
    let (_, cb) = b.gray_and_color_components();
    ca.distance(&cb)
}

fn gray_difference(a: &Color, b: &Color) -> f32 {
    let d = a.min_channel() - b.min_channel();
    3.0 * d * d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(w: u32, h: u32, color: Color) -> Image {
        let mut image = Image::new(w, h).unwrap();
        for p in image.pixels_mut() {
            p.color = color;
        }
        image
    }

    #[test]
    fn test_self_error_is_zero() {
        let mut image = filled(3, 3, Color::new(0.3, 0.6, 0.9));
        image.pixel_at_mut(1, 1).unwrap().color = Color::new(0.05, 0.0, 1.0);
        assert_eq!(image.error_from_image(&image.clone()).unwrap(), 0.0);
    }

    #[test]
    fn test_gray_only_difference() {
        let a = filled(1, 1, Color::gray(0.25));
        let b = filled(1, 1, Color::gray(0.75));
        // chroma 0, gray 3 * 0.25 = 0.75, weighted 0.6
        let e = a.error_from_image(&b).unwrap();
        assert!((e - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_chroma_only_difference() {
        let a = filled(1, 1, Color::new(0.5, 0.0, 0.0));
        let b = filled(1, 1, Color::new(0.0, 0.5, 0.0));
        // chroma 0.25 + 0.25, gray 0, weighted 1.4
        let e = a.error_from_image(&b).unwrap();
        assert!((e - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_chroma_weighs_more_than_gray() {
        let base = filled(2, 2, Color::new(0.5, 0.5, 0.5));
        let shifted_gray = filled(2, 2, Color::new(0.6, 0.6, 0.6));
        let shifted_hue = filled(2, 2, Color::new(0.6, 0.5, 0.5));
        let g = base.error_from_image(&shifted_gray).unwrap();
        let h = base.error_from_image(&shifted_hue).unwrap();
        assert!(g > 0.0 && h > 0.0);
        assert!((g - 4.0 * 0.6 * 3.0 * 0.01).abs() < 1e-5);
        assert!((h - 4.0 * 1.4 * 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_symmetric() {
        let a = filled(2, 1, Color::new(0.2, 0.4, 0.9));
        let b = filled(2, 1, Color::new(0.7, 0.1, 0.3));
        assert_eq!(
            a.error_from_image(&b).unwrap(),
            b.error_from_image(&a).unwrap()
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Image::new(2, 3).unwrap();
        let b = Image::new(3, 2).unwrap();
        assert_eq!(
            a.error_from_image(&b),
            Err(Error::DimensionMismatch {
                expected: (2, 3),
                actual: (3, 2)
            })
        );
    }
}
