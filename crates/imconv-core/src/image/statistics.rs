//! Color statistics over the whole grid
//!
//! - [`Image::avg_color`] - arithmetic mean color
//! - [`Image::secondary_color`] - centroid of the half of the pixels least
//!   similar to a reference color
//!
//! Sums are accumulated in `f64` so that averaging identical values
//! reproduces them exactly.

use super::Image;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::pixel::Pixel;
use log::trace;

impl Image {
    /// Mean of every pixel's channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use imconv_core::{Color, Image};
    ///
    /// let mut image = Image::new(2, 1).unwrap();
    /// image.pixel_at_mut(0, 0).unwrap().color = Color::new(1.0, 0.0, 0.5);
    /// assert_eq!(image.avg_color(), Color::new(0.5, 0.0, 0.25));
    /// ```
    pub fn avg_color(&self) -> Color {
        mean_color(self.data.iter())
    }

    /// Dominant alternate color relative to `first`.
    ///
    /// Every pixel gets the error `first.distance(pixel)` (raw RGB). Pixels
    /// are ordered by descending error with ties kept in row-major scan
    /// order, and the colors of the first `pixel_count / 2` are averaged.
    /// The result is the centroid of the pixels least like `first`, which
    /// makes a second representative color next to a primary one.
    ///
    /// `use_color_vector` selects whether the reference is taken as the
    /// chromatic residual of `first` or as `first` itself; the per-pixel
    /// error is always measured against the raw `first`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientPixels`] for images with fewer than two
    /// pixels, where the top half is empty.
    pub fn secondary_color(&self, first: &Color, use_color_vector: bool) -> Result<Color> {
        let half = self.data.len() / 2;
        if half == 0 {
            return Err(Error::InsufficientPixels {
                required: 2,
                actual: self.data.len(),
            });
        }

        let reference = if use_color_vector {
            first.gray_and_color_components().1
        } else {
            *first
        };
        trace!("secondary color: first {first:?}, reference {reference:?}");

        let mut ranked: Vec<(f32, &Pixel)> =
            self.data.iter().map(|p| (first.distance(&p.color), p)).collect();
        // Stable: equal errors keep scan order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(mean_color(ranked.iter().take(half).map(|(_, p)| *p)))
    }
}

/// Mean color of a non-empty pixel sequence.
fn mean_color<'a>(pixels: impl Iterator<Item = &'a Pixel>) -> Color {
    let mut sum = [0.0f64; 3];
    let mut count = 0usize;
    for p in pixels {
        sum[0] += f64::from(p.color.red);
        sum[1] += f64::from(p.color.green);
        sum[2] += f64::from(p.color.blue);
        count += 1;
    }

    let n = count.max(1) as f64;
    Color::new(
        (sum[0] / n) as f32,
        (sum[1] / n) as f32,
        (sum[2] / n) as f32,
    )
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
    fn test_avg_uniform_is_exact() {
        for c in [
            Color::new(0.1, 0.2, 0.3),
            Color::new(0.7, 0.333, 0.9),
            Color::from_u8(13, 200, 77),
        ] {
            assert_eq!(filled(7, 3, c).avg_color(), c);
        }
    }

    #[test]
    fn test_avg_primaries() {
        let mut image = Image::new(2, 2).unwrap();
        let colors = [
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.0, 1.0, 0.0),
            Color::new(0.0, 0.0, 1.0),
            Color::WHITE,
        ];
        for (p, c) in image.pixels_mut().iter_mut().zip(colors) {
            p.color = c;
        }
        assert_eq!(image.avg_color(), Color::gray(0.5));
    }

    #[test]
    fn test_secondary_two_tone() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let mut image = filled(4, 2, red);
        // Checkerboard so the two colors are interleaved in scan order
        for y in 0..2 {
            for x in 0..4 {
                if (x + y) % 2 == 1 {
                    image.pixel_at_mut(x, y).unwrap().color = blue;
                }
            }
        }

        assert_eq!(image.secondary_color(&red, false).unwrap(), blue);
        assert_eq!(image.secondary_color(&blue, false).unwrap(), red);
        assert_eq!(image.secondary_color(&red, true).unwrap(), blue);
    }

    #[test]
    fn test_secondary_takes_farthest_half() {
        // Errors from black: 0.01, 0.04, 0.09, 0.16
        let mut image = Image::new(4, 1).unwrap();
        for (i, p) in image.pixels_mut().iter_mut().enumerate() {
            p.color = Color::new((i + 1) as f32 * 0.1, 0.0, 0.0);
        }
        let c = image.secondary_color(&Color::BLACK, false).unwrap();
        assert!((c.red - 0.35).abs() < 1e-6);
        assert_eq!(c.green, 0.0);
    }

    #[test]
    fn test_secondary_ties_keep_scan_order() {
        // All pixels equidistant from gray(0.5): only the first half counts
        let colors = [
            Color::new(1.0, 0.5, 0.5),
            Color::new(0.5, 1.0, 0.5),
            Color::new(0.5, 0.5, 1.0),
            Color::new(0.0, 0.5, 0.5),
        ];
        let mut image = Image::new(4, 1).unwrap();
        for (p, c) in image.pixels_mut().iter_mut().zip(colors) {
            p.color = c;
        }
        let c = image.secondary_color(&Color::gray(0.5), false).unwrap();
        assert_eq!(c, Color::new(0.75, 0.75, 0.5));
    }

    #[test]
    fn test_secondary_odd_count_uses_floor_half() {
        let mut image = filled(3, 1, Color::BLACK);
        image.pixel_at_mut(1, 0).unwrap().color = Color::WHITE;
        // half = 1: only the single farthest pixel
        assert_eq!(
            image.secondary_color(&Color::BLACK, false).unwrap(),
            Color::WHITE
        );
    }

    #[test]
    fn test_secondary_needs_two_pixels() {
        let image = Image::new(1, 1).unwrap();
        assert_eq!(
            image.secondary_color(&Color::BLACK, false),
            Err(Error::InsufficientPixels {
                required: 2,
                actual: 1
            })
        );
    }
}
