//! Synthetic page fixtures
//!
//! Scanned pages are replaced by white rasters with solid black
//! rectangles standing in for ink, so expected geometry is known exactly.

use hocredit_core::{Color, Raster, WordBox};

/// A white 8-bit grayscale page
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn blank_page(width: u32, height: u32) -> Raster {
    Raster::new_gray(width, height).expect("fixture dimensions must be non-zero")
}

/// A white page with each rectangle painted black
pub fn page_with_rects(width: u32, height: u32, rects: &[WordBox]) -> Raster {
    let mut page = blank_page(width, height);
    for rect in rects {
        page.fill_rect(rect, Color::BLACK);
    }
    page
}
