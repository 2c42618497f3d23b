//! Palette - Fixed-size set of quantization target colors
//!
//! A palette owns an ordered list of [`Color`] entries. Its size is fixed at
//! construction and only changes through [`Palette::set_num_colors`], which
//! discards the previous contents.
//!
//! Nearest-color search lives in [`query`].

pub mod query;

pub use query::PaletteMatch;

use crate::color::{Color, NUM_CHANNELS};
use crate::error::{Error, Result};

/// Ordered, owned collection of palette colors
///
/// # Examples
///
/// ```
/// use imconv_core::{Color, Palette};
///
/// // Black, white and pure red
/// let palette = Palette::from_bytes(&[0, 0, 0, 255, 255, 255, 255, 0, 0]).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.color_at(2).unwrap(), &Color::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Create a palette with `len` black entries.
    pub fn with_len(len: usize) -> Self {
        Self {
            colors: vec![Color::BLACK; len],
        }
    }

    /// Create a palette from a flat byte buffer.
    ///
    /// Every three bytes form one color in red, green, blue order; each
    /// byte is divided by 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the buffer length is not a
    /// multiple of three.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % NUM_CHANNELS != 0 {
            return Err(Error::InvalidParameter(format!(
                "palette buffer length {} is not a multiple of {NUM_CHANNELS}",
                bytes.len()
            )));
        }

        let colors = bytes
            .chunks_exact(NUM_CHANNELS)
            .map(|c| Color::from_u8(c[0], c[1], c[2]))
            .collect();
        Ok(Self { colors })
    }

    /// Create a palette owning the given colors.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Get the number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Discard all entries and allocate `len` black ones.
    pub fn set_num_colors(&mut self, len: usize) {
        self.colors = vec![Color::BLACK; len];
    }

    /// Get a color by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Get a color by index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn color_at(&self, index: usize) -> Result<&Color> {
        self.colors.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.colors.len(),
        })
    }

    /// Overwrite the color at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len()`.
    pub fn set_color_at(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Get all colors as a slice.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the colors in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
