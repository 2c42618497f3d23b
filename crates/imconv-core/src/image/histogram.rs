//! Palette-index histogram ranking
//!
//! Counts how many pixels were assigned to each palette index and ranks the
//! indices by descending frequency. Computation returns a
//! [`ColorHistogram`]; its `Display` impl is the only presentation.

use super::Image;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// Pixel count of one palette index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRank {
    /// Palette index, or `None` for pixels never quantized
    pub palette_index: Option<usize>,
    /// Number of pixels carrying that index
    pub num_pixels: usize,
}

/// Palette indices ranked by descending pixel count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    ranks: Vec<ColorRank>,
}

impl ColorHistogram {
    /// Get the ranking, most frequent first.
    #[inline]
    pub fn ranks(&self) -> &[ColorRank] {
        &self.ranks
    }

    /// Number of distinct palette indices (including the unassigned bucket).
    #[inline]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Check if the ranking is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// The most frequent entry.
    pub fn top(&self) -> Option<&ColorRank> {
        self.ranks.first()
    }

    /// Total number of pixels counted.
    pub fn total_pixels(&self) -> usize {
        self.ranks.iter().map(|r| r.num_pixels).sum()
    }

    /// Iterate over the ranking, most frequent first.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorRank> {
        self.ranks.iter()
    }
}

impl<'a> IntoIterator for &'a ColorHistogram {
    type Item = &'a ColorRank;
    type IntoIter = std::slice::Iter<'a, ColorRank>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranks.iter()
    }
}

/// One line per rank: `<index>: <count>`, with `-` for unassigned pixels.
impl fmt::Display for ColorHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in &self.ranks {
            match rank.palette_index {
                Some(index) => writeln!(f, "{index}: {}", rank.num_pixels)?,
                None => writeln!(f, "-: {}", rank.num_pixels)?,
            }
        }
        Ok(())
    }
}

impl Image {
    /// Rank palette indices by how many pixels carry them.
    ///
    /// Counts are gathered per index, then the current maximum is extracted
    /// repeatedly. Ties are resolved toward the smaller index, with the
    /// unassigned bucket ordered before every index.
    ///
    /// # Examples
    ///
    /// ```
    /// use imconv_core::Image;
    ///
    /// let mut image = Image::new(3, 1).unwrap();
    /// image.pixel_at_mut(0, 0).unwrap().assign(2);
    /// image.pixel_at_mut(1, 0).unwrap().assign(2);
    /// image.pixel_at_mut(2, 0).unwrap().assign(0);
    ///
    /// let hist = image.color_histogram();
    /// assert_eq!(hist.top().unwrap().palette_index, Some(2));
    /// assert_eq!(hist.to_string(), "2: 2\n0: 1\n");
    /// ```
    pub fn color_histogram(&self) -> ColorHistogram {
        let mut counts: BTreeMap<Option<usize>, usize> = BTreeMap::new();
        for p in &self.data {
            *counts.entry(p.palette_index).or_insert(0) += 1;
        }
        debug!("color histogram: {} distinct palette indices", counts.len());

        // Palettes are small, so a full re-scan per rank is fine
        let mut ranks = Vec::with_capacity(counts.len());
        while !counts.is_empty() {
            let mut best: Option<(Option<usize>, usize)> = None;
            for (&index, &count) in &counts {
                if best.is_none_or(|(_, max)| count > max) {
                    best = Some((index, count));
                }
            }
            let Some((palette_index, num_pixels)) = best else {
                break;
            };
            counts.remove(&palette_index);
            ranks.push(ColorRank {
                palette_index,
                num_pixels,
            });
        }

        ColorHistogram { ranks }
    }
}
