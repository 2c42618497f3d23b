//! Nearest-neighbor resampling

use super::Image;
use crate::error::Result;
use crate::pixel::Pixel;

impl Image {
    /// Resample `src` to `width x height` by nearest neighbor.
    ///
    /// Horizontal and vertical scale factors are `src / dst` independently;
    /// destination pixel (x, y) copies source pixel
    /// `(floor(x * xscale), floor(y * yscale))`. No interpolation or
    /// anti-aliasing is done, and only colors are copied (palette indices
    /// start unassigned). Resampling to the source's own size is lossless.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] if width or height is 0.
    pub fn resample(src: &Image, width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;

        let xscale = src.width as f32 / width as f32;
        let yscale = src.height as f32 / height as f32;

        let src_width = src.width as usize;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let sy = source_coord(y, yscale, src.height);
            let src_row = &src.data[sy as usize * src_width..][..src_width];
            for x in 0..width {
                let sx = source_coord(x, xscale, src.width);
                data.push(Pixel::new(src_row[sx as usize].color));
            }
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }
}

/// Map a destination coordinate into the source, guarding against float
/// rounding landing one past the last source index.
#[inline]
fn source_coord(dst: u32, scale: f32, src_len: u32) -> u32 {
    let coord = (dst as f32 * scale).floor() as u32;
    coord.min(src_len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn gradient(w: u32, h: u32) -> Image {
        let mut image = Image::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                image.pixel_at_mut(x, y).unwrap().color =
                    Color::new(x as f32 / w as f32, y as f32 / h as f32, 0.5);
            }
        }
        image
    }

    #[test]
    fn test_same_size_is_lossless() {
        let src = gradient(7, 5);
        let dst = Image::resample(&src, 7, 5).unwrap();
        assert_eq!(src, dst);
    }

    #[test]
    fn test_upscale_duplicates() {
        let src = gradient(2, 2);
        let dst = Image::resample(&src, 4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(
                    dst.pixel_at(x, y).unwrap().color,
                    src.pixel_at(x / 2, y / 2).unwrap().color
                );
            }
        }
    }

    #[test]
    fn test_downscale_picks_floor() {
        let src = gradient(6, 3);
        let dst = Image::resample(&src, 3, 1).unwrap();
        assert_eq!(dst.dimensions(), (3, 1));
        for x in 0..3 {
            assert_eq!(
                dst.pixel_at(x, 0).unwrap().color,
                src.pixel_at(x * 2, 0).unwrap().color
            );
        }
    }

    #[test]
    fn test_non_integer_scale_stays_in_bounds() {
        let src = gradient(3, 7);
        let dst = Image::resample(&src, 11, 2).unwrap();
        assert_eq!(dst.pixel_count(), 22);
        // y = 1 maps to floor(3.5) = 3
        assert_eq!(
            dst.pixel_at(0, 1).unwrap().color,
            src.pixel_at(0, 3).unwrap().color
        );
    }

    #[test]
    fn test_resample_drops_assignments() {
        let mut src = gradient(2, 2);
        src.pixel_at_mut(0, 0).unwrap().assign(1);
        let dst = Image::resample(&src, 2, 2).unwrap();
        assert!(dst.pixel_at(0, 0).unwrap().palette_index.is_none());
    }

    #[test]
    fn test_zero_target_rejected() {
        let src = gradient(2, 2);
        assert!(Image::resample(&src, 0, 2).is_err());
    }
}
