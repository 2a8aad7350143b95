//! hocredit-test - Regression test framework for the hOCRedit engines
//!
//! This crate provides a small regression harness and synthetic page
//! fixtures shared by the integration tests of the other crates.
//!
//! Two modes are supported:
//!
//! - **Compare**: Check every recorded value and fail on mismatch (default)
//! - **Display**: Run and print results without failing
//!
//! # Usage
//!
//! ```ignore
//! use hocredit_test::RegParams;
//!
//! let mut rp = RegParams::new("levenshtein");
//! rp.compare_values(3.0, distance as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod fixtures;
mod params;

pub use fixtures::{blank_page, page_with_rects};
pub use params::{RegParams, RegTestMode};
