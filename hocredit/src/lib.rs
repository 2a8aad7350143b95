//! hocredit - Engines behind an hOCR correction workflow
//!
//! # Overview
//!
//! hocredit provides the two compute-heavy pieces of a page correction
//! tool:
//!
//! - Word and line segmentation of scanned page images ([`region`])
//! - Character- and word-level transcription accuracy ([`metrics`])
//! - Image decoding into rasters ([`io`])
//!
//! # Example
//!
//! ```
//! use hocredit::{Color, Raster, WordBox};
//! use hocredit::metrics::score;
//! use hocredit::region::{SegmentationOptions, segment_page};
//!
//! let mut page = Raster::new_gray(300, 100).unwrap();
//! page.fill_rect(&WordBox::new(10, 10, 50, 20), Color::BLACK);
//! let layout = segment_page(&page, &SegmentationOptions::default()).unwrap();
//! assert_eq!(layout.word_count(), 1);
//!
//! let m = score("ink on paper", "ink on paper");
//! assert_eq!(m.word_accuracy, 1.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use hocredit_core::*;

// Re-export engine crates as modules to avoid name conflicts
pub use hocredit_io as io;
pub use hocredit_metrics as metrics;
pub use hocredit_region as region;
