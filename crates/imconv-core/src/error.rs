//! Error types for imconv-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Indexed accessors, dimension checks and palette searches report their
//! failures through these variants instead of reading out of bounds.

use thiserror::Error;

/// imconv-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Too few pixels for the requested statistic
    #[error("not enough pixels: need at least {required}, got {actual}")]
    InsufficientPixels { required: usize, actual: usize },

    /// No palette entry survived the match filters
    #[error("no palette entry matches (palette empty or every entry filtered)")]
    NoPaletteMatch,
}

/// Result type alias for imconv-core operations
pub type Result<T> = std::result::Result<T, Error>;
