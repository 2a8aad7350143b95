//! hocredit-region - Word and line segmentation for scanned pages
//!
//! This crate finds candidate word regions on a page image without any
//! OCR engine:
//!
//! - **Pixel classification** - Dark pixels are text, the rest background
//! - **Connected component analysis** - 8-connected flood fill over text pixels
//! - **Size selection** - Components outside plausible word size are dropped
//! - **Merging** - Adjacent fragments are joined into words
//! - **Line grouping** - Words are grouped into horizontal text lines
//!
//! Every stage is a pure function of its input; the engines keep no state
//! between calls and can run concurrently on independent pages.
//!
//! # Examples
//!
//! ```
//! use hocredit_core::{Color, Raster, WordBox};
//! use hocredit_region::{SegmentationOptions, segment_page};
//!
//! let mut page = Raster::new_gray(400, 200).unwrap();
//! page.fill_rect(&WordBox::new(20, 20, 60, 16), Color::BLACK);
//! page.fill_rect(&WordBox::new(120, 22, 40, 14), Color::BLACK);
//!
//! let layout = segment_page(&page, &SegmentationOptions::default()).unwrap();
//! assert_eq!(layout.line_count(), 1);
//! assert_eq!(layout.word_count(), 2);
//! ```

pub mod classify;
pub mod conncomp;
pub mod error;
pub mod merge;
pub mod order;
pub mod segment;
pub mod select;
pub mod textline;

// Re-export core types
pub use hocredit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use classify::{
    ClassifierOptions, DEFAULT_DARK_THRESHOLD, PixelClass, TextMask, classify, classify_grid,
};
pub use conncomp::{
    ConnectedComponent, ConnectivityType, VisitedMask, components_from_mask,
    find_connected_components, find_word_components,
};
pub use merge::{MergeOptions, merge_components};
pub use order::sort_into_rows;
pub use segment::{PageLayout, SegmentationOptions, detect_words, segment_lines, segment_page};
pub use select::{SizeBounds, filter_components};
pub use textline::{LineOptions, group_into_lines};
