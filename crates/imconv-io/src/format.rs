//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.
//! Only binary PPM carries a signature; raw mono dumps are headerless and
//! therefore write-only.

use crate::{ImageFormat, IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNM variants other than binary PPM
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";

    /// Binary PPM
    pub const PPM_BINARY: &[u8] = b"P6";
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    let first_two = &data[..2];
    if first_two == magic::PPM_BINARY {
        return Ok(ImageFormat::Ppm);
    }

    if first_two == magic::PBM_ASCII
        || first_two == magic::PGM_ASCII
        || first_two == magic::PPM_ASCII
        || first_two == magic::PBM_BINARY
        || first_two == magic::PGM_BINARY
    {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM variant {} (only binary P6 is supported)",
            String::from_utf8_lossy(first_two)
        )));
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ppm() {
        let data = b"P6\n2 2\n255\n";
        assert_eq!(detect_format_from_bytes(data).unwrap(), ImageFormat::Ppm);
    }

    #[test]
    fn test_detect_other_pnm_variants() {
        for magic in [b"P1", b"P2", b"P3", b"P4", b"P5"] {
            assert!(matches!(
                detect_format_from_bytes(magic),
                Err(IoError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn test_detect_unknown() {
        let data = [0x89, 0x50, 0x4E, 0x47];
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_detect_too_short() {
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
        assert!(detect_format_from_bytes(&[]).is_err());
    }

    #[test]
    fn test_detect_missing_file() {
        assert!(matches!(
            detect_format("/nonexistent/imconv/missing.ppm"),
            Err(IoError::Io(_))
        ));
    }
}
