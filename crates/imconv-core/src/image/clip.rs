//! Sub-image extraction and placement

use super::Image;
use crate::error::{Error, Result};

impl Image {
    /// Copy the `width x height` region of `src` whose top-left corner is
    /// at (x, y).
    ///
    /// Palette assignments are copied along with the colors.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0
    /// - [`Error::DimensionMismatch`] if the region extends past `src`
    pub fn crop(src: &Image, x: u32, y: u32, width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        check_fits(src.dimensions(), x, y, (width, height))?;

        let src_width = src.width as usize;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in y..y + height {
            let start = row as usize * src_width + x as usize;
            data.extend_from_slice(&src.data[start..start + width as usize]);
        }

        Ok(Image {
            width,
            height,
            data,
        })
    }

    /// Copy the colors of `src` into this image with its top-left corner at
    /// (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `src` does not fit inside
    /// this image at that offset; nothing is written in that case.
    pub fn paste(&mut self, src: &Image, x: u32, y: u32) -> Result<()> {
        check_fits(self.dimensions(), x, y, src.dimensions())?;

        let dst_width = self.width as usize;
        let src_width = src.width as usize;
        for (sy, src_row) in src.data.chunks_exact(src_width).enumerate() {
            let start = (y as usize + sy) * dst_width + x as usize;
            let dst_row = &mut self.data[start..start + src_width];
            for (dst, s) in dst_row.iter_mut().zip(src_row) {
                dst.copy_color_from(s);
            }
        }
        Ok(())
    }
}

/// Check that a `region` placed at (x, y) lies within `bounds`.
fn check_fits(bounds: (u32, u32), x: u32, y: u32, region: (u32, u32)) -> Result<()> {
    let right = u64::from(x) + u64::from(region.0);
    let bottom = u64::from(y) + u64::from(region.1);
    if right > u64::from(bounds.0) || bottom > u64::from(bounds.1) {
        return Err(Error::DimensionMismatch {
            expected: bounds,
            actual: (
                u32::try_from(right).unwrap_or(u32::MAX),
                u32::try_from(bottom).unwrap_or(u32::MAX),
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn numbered(w: u32, h: u32) -> Image {
        let mut image = Image::new(w, h).unwrap();
        let n = (w * h) as f32;
        for y in 0..h {
            for x in 0..w {
                let v = (y * w + x) as f32 / n;
                image.pixel_at_mut(x, y).unwrap().color = Color::gray(v);
            }
        }
        image
    }

    #[test]
    fn test_crop_region() {
        let src = numbered(5, 4);
        let sub = Image::crop(&src, 1, 2, 3, 2).unwrap();
        assert_eq!(sub.dimensions(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(sub.pixel_at(x, y), src.pixel_at(x + 1, y + 2));
            }
        }
    }

    #[test]
    fn test_crop_full_is_copy() {
        let src = numbered(3, 3);
        assert_eq!(Image::crop(&src, 0, 0, 3, 3).unwrap(), src);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let src = numbered(4, 4);
        assert!(matches!(
            Image::crop(&src, 2, 0, 3, 1),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(Image::crop(&src, 0, 4, 1, 1).is_err());
        assert!(Image::crop(&src, u32::MAX, 0, 2, 1).is_err());
        assert!(Image::crop(&src, 0, 0, 0, 1).is_err());
    }

    #[test]
    fn test_paste() {
        let mut dst = Image::new(4, 4).unwrap();
        let patch = numbered(2, 2);
        dst.paste(&patch, 2, 1).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(
                    dst.pixel_at(x + 2, y + 1).unwrap().color,
                    patch.pixel_at(x, y).unwrap().color
                );
            }
        }
        assert_eq!(dst.pixel_at(0, 0).unwrap().color, Color::BLACK);
        assert_eq!(dst.pixel_at(1, 1).unwrap().color, Color::BLACK);
    }

    #[test]
    fn test_paste_keeps_assignments() {
        let mut dst = Image::new(2, 1).unwrap();
        dst.pixel_at_mut(0, 0).unwrap().assign(7);
        let patch = numbered(1, 1);
        dst.paste(&patch, 0, 0).unwrap();
        assert_eq!(dst.pixel_at(0, 0).unwrap().palette_index, Some(7));
    }

    #[test]
    fn test_paste_must_fit() {
        let mut dst = Image::new(3, 3).unwrap();
        let before = dst.clone();
        let patch = numbered(2, 2);
        assert!(dst.paste(&patch, 2, 0).is_err());
        assert_eq!(dst, before);
    }
}
