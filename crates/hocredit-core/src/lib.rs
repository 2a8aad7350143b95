//! hocredit-core - Basic data structures for hOCR segmentation and scoring
//!
//! This crate provides the fundamental data structures shared by the
//! segmentation and accuracy engines:
//!
//! - [`PixelGrid`] / [`Raster`] - Read-only pixel access and its owned implementation
//! - [`Color`] - A pixel value in its native sample layout
//! - [`WordBox`] / [`LineBox`] / [`BBox`] - Word and line rectangles
//!
//! # Example
//!
//! ```
//! use hocredit_core::{Color, PixelGrid, Raster, WordBox};
//!
//! let mut page = Raster::new_gray(200, 100).unwrap();
//! page.fill_rect(&WordBox::new(10, 10, 40, 12), Color::BLACK);
//! assert_eq!(page.at(20, 15), Color::Gray(0));
//! assert_eq!(page.width(), 200);
//! ```

pub mod color;
pub mod error;
pub mod geometry;
pub mod raster;

pub use color::{Color, MAX_INTENSITY};
pub use error::{Error, Result};
pub use geometry::{BBox, LineBox, WordBox};
pub use raster::{PixelGrid, Raster, SampleLayout};
