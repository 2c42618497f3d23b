//! imconv Core - Color analysis data structures
//!
//! This crate provides the types the imconv engine is built from:
//!
//! - [`Color`] - normalized RGB triple with the gray/chroma decomposition
//! - [`Palette`] - ordered list of colors with nearest-match search
//! - [`Pixel`] - a color plus its assigned palette index
//! - [`Image`] - pixel grid with ingest, resampling, statistics,
//!   quantization and perceptual comparison
//!
//! All channel values are `f32` in `[0, 1]`. Conversion to and from 8-bit
//! samples happens only at the ingest and encode boundaries.

pub mod color;
pub mod error;
pub mod image;
pub mod palette;
pub mod pixel;

pub use color::{Color, NUM_CHANNELS, channel_to_u8};
pub use error::{Error, Result};
pub use image::{
    ColorHistogram, ColorRank, DEFAULT_BOOST, Image, IngestOptions, QuantizeOptions, RawLayout,
};
pub use palette::{Palette, PaletteMatch};
pub use pixel::Pixel;
