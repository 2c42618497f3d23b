//! imconv - Color quantization and perceptual image comparison
//!
//! # Overview
//!
//! imconv reduces images to a fixed palette and scores how different two
//! images look:
//!
//! - Image I/O (binary PPM, raw mono dump)
//! - Saturation-boosted ingestion of raw 8-bit buffers
//! - Nearest-neighbor resampling, cropping and pasting
//! - Average and secondary color extraction
//! - Palette matching with optional grayscale exclusion
//! - Quantization and palette-index histograms
//! - Perceptual error weighting chroma over brightness
//!
//! # Example
//!
//! ```
//! use imconv::io::{ImageFormat, read_image_mem, write_image_mem};
//! use imconv::{Color, Image, IngestOptions, Palette, QuantizeOptions};
//!
//! let mut image = Image::new(4, 4).unwrap();
//! for p in image.pixels_mut() {
//!     p.color = Color::new(0.9, 0.2, 0.1);
//! }
//!
//! let ppm = write_image_mem(&image, ImageFormat::Ppm).unwrap();
//! let mut decoded = read_image_mem(&ppm, IngestOptions::default()).unwrap();
//!
//! let palette = Palette::from_bytes(&[255, 0, 0, 0, 0, 255]).unwrap();
//! let source = decoded.clone();
//! decoded.quantize(&palette, QuantizeOptions::default()).unwrap();
//!
//! assert_eq!(decoded.color_histogram().to_string(), "0: 16\n");
//! assert!(decoded.error_from_image(&source).unwrap() > 0.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imconv_core::*;

// Re-export I/O as a module to keep format names out of the root
pub use imconv_io as io;
