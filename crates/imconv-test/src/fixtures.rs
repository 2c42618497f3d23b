//! Synthetic test inputs
//!
//! Images, palettes and encoded files built in code, so that regression
//! tests do not depend on checked-in data.

use crate::error::{TestError, TestResult};
use imconv_core::{Color, Image, Palette};

/// Pure red
pub const RED: Color = Color::new(1.0, 0.0, 0.0);
/// Pure green
pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
/// Pure blue
pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

fn fixture_error(name: &str, err: imconv_core::Error) -> TestError {
    TestError::Fixture {
        name: name.to_string(),
        message: err.to_string(),
    }
}

/// Image with every pixel set to `color`.
pub fn uniform(width: u32, height: u32, color: Color) -> TestResult<Image> {
    let mut image = Image::new(width, height).map_err(|e| fixture_error("uniform", e))?;
    for p in image.pixels_mut() {
        p.color = color;
    }
    Ok(image)
}

/// Image whose pixel (x, y) is produced by `f(x, y)`.
pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> TestResult<Image>
where
    F: FnMut(u32, u32) -> Color,
{
    let mut image = Image::new(width, height).map_err(|e| fixture_error("from_fn", e))?;
    for y in 0..height {
        for x in 0..width {
            if let Some(p) = image.pixel_at_mut(x, y) {
                p.color = f(x, y);
            }
        }
    }
    Ok(image)
}

/// Red ramp along x, green ramp along y, constant blue.
pub fn gradient(width: u32, height: u32) -> TestResult<Image> {
    from_fn(width, height, |x, y| {
        Color::new(
            x as f32 / width.max(2).saturating_sub(1) as f32,
            y as f32 / height.max(2).saturating_sub(1) as f32,
            0.5,
        )
    })
}

/// Alternating `a`/`b` pixels, `a` at the origin.
pub fn checkerboard(width: u32, height: u32, a: Color, b: Color) -> TestResult<Image> {
    from_fn(width, height, |x, y| if (x + y) % 2 == 0 { a } else { b })
}

/// Palette of red, green, blue, black and white, in that order.
pub fn primaries_palette() -> Palette {
    Palette::from_colors(vec![RED, GREEN, BLUE, Color::BLACK, Color::WHITE])
}

/// Encode a binary PPM by hand.
///
/// `comment`, if given, is written as a `#` line between the magic and
/// the dimensions.
pub fn ppm_bytes(width: u32, height: u32, maxval: u32, comment: Option<&str>, data: &[u8]) -> Vec<u8> {
    let mut bytes = b"P6\n".to_vec();
    if let Some(text) = comment {
        bytes.extend_from_slice(format!("# {text}\n").as_bytes());
    }
    bytes.extend_from_slice(format!("{width} {height}\n{maxval}\n").as_bytes());
    bytes.extend_from_slice(data);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let image = uniform(3, 2, RED).unwrap();
        assert!(image.pixels().iter().all(|p| p.color == RED));
        assert!(uniform(0, 2, RED).is_err());
    }

    #[test]
    fn test_gradient_corners() {
        let image = gradient(5, 3).unwrap();
        assert_eq!(image.pixel_at(0, 0).unwrap().color, Color::new(0.0, 0.0, 0.5));
        assert_eq!(image.pixel_at(4, 2).unwrap().color, Color::new(1.0, 1.0, 0.5));
    }

    #[test]
    fn test_checkerboard() {
        let image = checkerboard(3, 3, RED, BLUE).unwrap();
        assert_eq!(image.pixel_at(0, 0).unwrap().color, RED);
        assert_eq!(image.pixel_at(1, 0).unwrap().color, BLUE);
        assert_eq!(image.pixel_at(1, 1).unwrap().color, RED);
    }

    #[test]
    fn test_ppm_bytes() {
        let bytes = ppm_bytes(1, 1, 255, Some("hi"), &[1, 2, 3]);
        assert_eq!(bytes, b"P6\n# hi\n1 1\n255\n\x01\x02\x03".to_vec());
    }
}
