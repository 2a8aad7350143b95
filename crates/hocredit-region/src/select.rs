//! Component selection by size
//!
//! Raw components include noise specks and ruled lines. Only
//! those whose bounding box is plausible for a single word survive.
//!
//! The defaults assume a roughly portrait page scanned at a resolution
//! where body text is line-scale: glyph clusters at least 8 px wide and
//! 10 px tall, no wider than half the page, and no taller than a fifth of
//! it. Very small print or display-size headings fall outside these bounds
//! and are lost unless the bounds are widened.

use crate::error::{RegionError, RegionResult};
use hocredit_core::WordBox;
use serde::{Deserialize, Serialize};

/// Size bounds for a plausible word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    /// Minimum width in pixels (inclusive)
    pub min_width: u32,
    /// Minimum height in pixels (inclusive)
    pub min_height: u32,
    /// Maximum width is `image_width / max_width_divisor` (inclusive)
    pub max_width_divisor: u32,
    /// Maximum height is `image_height / max_height_divisor` (inclusive)
    pub max_height_divisor: u32,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min_width: 8,
            min_height: 10,
            max_width_divisor: 2,
            max_height_divisor: 5,
        }
    }
}

impl SizeBounds {
    /// Set the minimum word size
    pub fn with_min_size(mut self, width: u32, height: u32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Set the divisors applied to the image size for the maximum word size
    pub fn with_max_divisors(mut self, width_divisor: u32, height_divisor: u32) -> Self {
        self.max_width_divisor = width_divisor;
        self.max_height_divisor = height_divisor;
        self
    }

    /// Check the parameters
    pub fn validate(&self) -> RegionResult<()> {
        if self.max_width_divisor == 0 || self.max_height_divisor == 0 {
            return Err(RegionError::InvalidParameters(format!(
                "size divisors must be positive: width={}, height={}",
                self.max_width_divisor, self.max_height_divisor
            )));
        }
        Ok(())
    }

    /// Whether `b` is a plausible word on an image of the given size
    pub fn accepts(&self, b: &WordBox, image_width: u32, image_height: u32) -> bool {
        if !b.is_valid() {
            return false;
        }
        let (w, h) = (b.width as u32, b.height as u32);
        let max_w = image_width / self.max_width_divisor.max(1);
        let max_h = image_height / self.max_height_divisor.max(1);
        w >= self.min_width && h >= self.min_height && w <= max_w && h <= max_h
    }
}

/// Keep the components that [`SizeBounds::accepts`]
///
/// Order is preserved.
pub fn filter_components(
    components: Vec<WordBox>,
    image_width: u32,
    image_height: u32,
    bounds: &SizeBounds,
) -> Vec<WordBox> {
    components
        .into_iter()
        .filter(|b| bounds.accepts(b, image_width, image_height))
        .collect()
}
