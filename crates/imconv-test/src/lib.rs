//! imconv-test - Regression test framework for imconv
//!
//! Regression tests live in each crate's `tests/*_reg.rs` and record their
//! checks on a [`RegParams`]. Two modes are supported:
//!
//! - **Compare**: run every check and report failures (default)
//! - **Display**: additionally write the produced images to
//!   `tests/regout` for visual inspection
//!
//! Inputs are built in code by [`fixtures`] rather than loaded from
//! checked-in image files.
//!
//! # Usage
//!
//! ```ignore
//! use imconv_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("analysis");
//! let image = fixtures::uniform(4, 4, fixtures::RED).unwrap();
//! rp.compare_values(1.0, image.avg_color().red as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imconv-test is at crates/imconv-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
