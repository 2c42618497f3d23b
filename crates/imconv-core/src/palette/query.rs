//! Nearest-color search
//!
//! Linear scan over the palette with two optional filters: neutral gray
//! entries can be skipped so a chromatic entry is forced, and one index can
//! be excluded so an already-used slot is not selected again.

use super::Palette;
use crate::color::Color;

/// Result of a nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMatch {
    /// Index of the matched palette entry
    pub index: usize,
    /// The matched palette color
    pub color: Color,
    /// Squared distance between the query and the matched color
    pub distance: f32,
}

impl Palette {
    /// Find the palette entry closest to `color`.
    ///
    /// Entries are scanned in index order and compared with
    /// [`Color::distance`]. Before an entry is considered:
    ///
    /// 1. if `include_grayscale` is false, entries whose three channels are
    ///    exactly equal are skipped;
    /// 2. the entry at `exclude`, if given, is skipped.
    ///
    /// On ties the lowest index wins.
    ///
    /// # Returns
    ///
    /// `None` if the palette is empty or every entry was filtered out.
    ///
    /// # Examples
    ///
    /// ```
    /// use imconv_core::{Color, Palette};
    ///
    /// let palette = Palette::from_bytes(&[128, 128, 128, 255, 0, 0]).unwrap();
    /// let query = Color::new(0.6, 0.45, 0.45);
    ///
    /// assert_eq!(palette.closest_color(&query, true, None).unwrap().index, 0);
    /// assert_eq!(palette.closest_color(&query, false, None).unwrap().index, 1);
    /// assert!(palette.closest_color(&query, false, Some(1)).is_none());
    /// ```
    pub fn closest_color(
        &self,
        color: &Color,
        include_grayscale: bool,
        exclude: Option<usize>,
    ) -> Option<PaletteMatch> {
        let mut best: Option<PaletteMatch> = None;

        for (index, candidate) in self.colors.iter().enumerate() {
            if !include_grayscale && candidate.is_gray() {
                continue;
            }
            if exclude == Some(index) {
                continue;
            }

            let distance = candidate.distance(color);
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(PaletteMatch {
                    index,
                    color: *candidate,
                    distance,
                });
            }
        }

        best
    }

    /// Index of the palette entry closest to `color`, with no filtering.
    pub fn find_nearest(&self, color: &Color) -> Option<usize> {
        self.closest_color(color, true, None).map(|m| m.index)
    }

    /// Check if every entry is a neutral gray.
    pub fn is_grayscale(&self) -> bool {
        self.colors.iter().all(Color::is_gray)
    }
}
