//! I/O error types
//!
//! Provides a unified error type for every decode and encode path. Parse
//! failures, short reads and core-library errors are all mapped into
//! `IoError` so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The pixel data could not be decoded (e.g. truncated)
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library (e.g. invalid dimensions)
    #[error("core error: {0}")]
    Core(#[from] imconv_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
