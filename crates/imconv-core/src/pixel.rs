//! Pixel - A color tagged with its quantization result

use crate::color::Color;

/// One image pixel: a color plus the palette index it was last matched to.
///
/// `palette_index` is `None` until the pixel has been quantized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    /// Current color of the pixel
    pub color: Color,
    /// Palette entry assigned by the last quantization, if any
    pub palette_index: Option<usize>,
}

impl Pixel {
    /// Create an unassigned pixel with the given color.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            palette_index: None,
        }
    }

    /// Get the pixel's color by value.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Copy the color (but not the palette index) of another pixel.
    #[inline]
    pub fn copy_color_from(&mut self, other: &Pixel) {
        self.color = other.color;
    }

    /// Record a palette assignment.
    #[inline]
    pub fn assign(&mut self, index: usize) {
        self.palette_index = Some(index);
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        Pixel::new(color)
    }
}

impl From<&Pixel> for Color {
    fn from(pixel: &Pixel) -> Self {
        pixel.color
    }
}
