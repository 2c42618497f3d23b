//! Color - Normalized three-channel color value
//!
//! A [`Color`] holds red, green and blue intensities as `f32`, nominally in
//! `[0.0, 1.0]`. Values are never clamped implicitly; only the operations
//! that document a clamp (8-bit conversion, saturation boost) apply one.
//!
//! # Gray/color decomposition
//!
//! [`Color::gray_and_color_components`] splits a color into its achromatic
//! floor (the minimum channel, replicated) and the chromatic residual left
//! after subtracting that floor. The residual always has at least one zero
//! channel. This is a min-decomposition, not a luminance transform.

/// Number of channels in a [`Color`]
pub const NUM_CHANNELS: usize = 3;

/// Normalized RGB color
///
/// # Examples
///
/// ```
/// use imconv_core::Color;
///
/// let orange = Color::new(1.0, 0.5, 0.0);
/// assert_eq!(orange.distance(&orange), 0.0);
///
/// let (gray, chroma) = Color::new(0.75, 0.5, 0.25).gray_and_color_components();
/// assert_eq!(gray, Color::new(0.25, 0.25, 0.25));
/// assert_eq!(chroma, Color::new(0.5, 0.25, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red intensity
    pub red: f32,
    /// Green intensity
    pub green: f32,
    /// Blue intensity
    pub blue: f32,
}

impl Color {
    /// Black (all channels zero)
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// White (all channels one)
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from normalized channel values.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Create a neutral color with all three channels set to `value`.
    #[inline]
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color from 8-bit channel values (each divided by 255).
    #[inline]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        )
    }

    /// Create a color from a `[red, green, blue]` array.
    #[inline]
    pub const fn from_channels(channels: [f32; NUM_CHANNELS]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }

    /// Get the channels as a `[red, green, blue]` array.
    #[inline]
    pub const fn channels(&self) -> [f32; NUM_CHANNELS] {
        [self.red, self.green, self.blue]
    }

    /// Overwrite all three channels.
    #[inline]
    pub fn set(&mut self, red: f32, green: f32, blue: f32) {
        self.red = red;
        self.green = green;
        self.blue = blue;
    }

    /// Squared Euclidean distance to another color.
    ///
    /// No square root is taken, so the result is only meaningful for
    /// ranking and comparison.
    #[inline]
    pub fn distance(&self, other: &Color) -> f32 {
        let dr = other.red - self.red;
        let dg = other.green - self.green;
        let db = other.blue - self.blue;
        dr * dr + dg * dg + db * db
    }

    /// Smallest of the three channels.
    #[inline]
    pub fn min_channel(&self) -> f32 {
        self.red.min(self.green).min(self.blue)
    }

    /// Whether the three channels are exactly equal.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.red == self.green && self.red == self.blue
    }

    /// Split into achromatic and chromatic parts.
    ///
    /// Returns `(gray, color)`: `gray` is the minimum channel replicated
    /// into all three channels, `color` is each channel minus that minimum.
    /// For every channel `gray + color` reproduces the input (up to one
    /// rounding step of the subtraction).
    pub fn gray_and_color_components(&self) -> (Color, Color) {
        let min = self.min_channel();
        let gray = Color::gray(min);
        let color = Color::new(self.red - min, self.green - min, self.blue - min);
        (gray, color)
    }

    /// Convert to 8-bit channel values.
    ///
    /// Channels are clamped to `[0, 1]`, scaled by 255 and rounded.
    #[inline]
    pub fn to_u8(&self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }
}

impl From<[f32; NUM_CHANNELS]> for Color {
    fn from(channels: [f32; NUM_CHANNELS]) -> Self {
        Self::from_channels(channels)
    }
}

/// Quantize one normalized channel to a byte.
#[inline]
pub fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Color> {
        vec![
            Color::BLACK,
            Color::WHITE,
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.2, 0.7, 0.4),
            Color::new(0.9, 0.9, 0.3),
            Color::gray(0.5),
            Color::from_u8(17, 200, 91),
        ]
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for c in samples() {
            assert_eq!(c.distance(&c), 0.0);
        }
    }

    #[test]
    fn test_distance_is_squared() {
        let a = Color::new(0.0, 0.0, 0.0);
        let b = Color::new(0.5, 0.0, 0.0);
        assert_eq!(a.distance(&b), 0.25);
        assert_eq!(b.distance(&a), 0.25);

        let c = Color::new(1.0, 1.0, 1.0);
        assert_eq!(a.distance(&c), 3.0);
    }

    #[test]
    fn test_decomposition_has_zero_channel() {
        for c in samples() {
            let (_, chroma) = c.gray_and_color_components();
            assert!(
                chroma.channels().contains(&0.0),
                "residual {chroma:?} of {c:?} has no zero channel"
            );
        }
    }

    #[test]
    fn test_decomposition_sums_back() {
        for c in samples() {
            let (gray, chroma) = c.gray_and_color_components();
            assert!(gray.is_gray());
            let orig = c.channels();
            let g = gray.channels();
            let col = chroma.channels();
            for i in 0..NUM_CHANNELS {
                assert!((g[i] + col[i] - orig[i]).abs() <= f32::EPSILON);
            }
        }
    }

    #[test]
    fn test_decomposition_values() {
        let (gray, chroma) = Color::new(0.25, 1.0, 0.5).gray_and_color_components();
        assert_eq!(gray, Color::gray(0.25));
        assert_eq!(chroma, Color::new(0.0, 0.75, 0.25));
    }

    #[test]
    fn test_is_gray() {
        assert!(Color::gray(0.3).is_gray());
        assert!(Color::BLACK.is_gray());
        assert!(!Color::new(0.3, 0.3, 0.31).is_gray());
    }

    #[test]
    fn test_u8_conversion() {
        assert_eq!(Color::from_u8(255, 0, 128).to_u8(), (255, 0, 128));
        for v in 0..=255u8 {
            assert_eq!(Color::from_u8(v, v, v).to_u8(), (v, v, v));
        }
        // Out-of-range channels saturate
        assert_eq!(Color::new(1.5, -0.2, 0.5).to_u8(), (255, 0, 128));
    }

    #[test]
    fn test_set() {
        let mut c = Color::BLACK;
        c.set(0.1, 0.2, 0.3);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3));
    }
}
