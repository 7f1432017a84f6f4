//! bytewrite-test - Regression test framework for bytewrite
//!
//! Regression tests live in `crates/*/tests/*_reg.rs`. Each one creates a
//! [`RegParams`], records comparisons against expected values, and asserts
//! on [`RegParams::cleanup`]. Two modes are supported:
//!
//! - **Compare**: check computed results (default)
//! - **Display**: additionally write intermediate images to `tests/regout`
//!   for visual inspection
//!
//! Inputs come from [`synth`], which draws glyphs and words in code so no
//! image files are needed to run the suite.
//!
//! # Usage
//!
//! ```ignore
//! use bytewrite_test::RegParams;
//!
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(3.0, spans.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // bytewrite-test is at crates/bytewrite-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
