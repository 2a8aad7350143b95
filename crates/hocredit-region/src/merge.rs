//! Component merging
//!
//! Glyphs of one word often fall apart into several components (the dot
//! of an "i", strokes broken by faded ink). Neighbouring fragments are
//! merged back into words.
//!
//! The policy is greedy: after sorting into reading order, each fragment
//! is compared only with the previous member of the open group, never
//! with the group as a whole.

use crate::error::{RegionError, RegionResult};
use crate::order::sort_into_rows;
use hocredit_core::WordBox;
use serde::{Deserialize, Serialize};

/// Options for component merging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOptions {
    /// Boxes whose tops differ by less than this many pixels share a row
    pub same_row_threshold: i32,
    /// Maximum merge gap is `max(height_a, height_b) / gap_divisor`
    pub gap_divisor: i32,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            same_row_threshold: 10,
            gap_divisor: 3,
        }
    }
}

impl MergeOptions {
    /// Set the row bucketing threshold
    pub fn with_same_row_threshold(mut self, threshold: i32) -> Self {
        self.same_row_threshold = threshold;
        self
    }

    /// Set the gap divisor
    pub fn with_gap_divisor(mut self, divisor: i32) -> Self {
        self.gap_divisor = divisor;
        self
    }

    /// Check the parameters
    pub fn validate(&self) -> RegionResult<()> {
        if self.gap_divisor <= 0 {
            return Err(RegionError::InvalidParameters(format!(
                "gap divisor must be positive, got {}",
                self.gap_divisor
            )));
        }
        if self.same_row_threshold < 0 {
            return Err(RegionError::InvalidParameters(format!(
                "same-row threshold must be non-negative, got {}",
                self.same_row_threshold
            )));
        }
        Ok(())
    }

    /// Whether `next` continues the word whose last fragment is `prev`
    ///
    /// `next` must start at or after `prev`'s right edge, within
    /// `max(height) / gap_divisor` pixels, and the vertical spans must
    /// intersect.
    pub fn should_merge(&self, prev: &WordBox, next: &WordBox) -> bool {
        let gap = prev.horizontal_gap_to(next);
        let max_gap = prev.height.max(next.height) / self.gap_divisor.max(1);
        gap >= 0 && gap <= max_gap && prev.overlaps_vertically(next)
    }
}

/// Merge adjacent fragments into words
///
/// Degenerate boxes are dropped. The result is in reading order.
pub fn merge_components(mut components: Vec<WordBox>, options: &MergeOptions) -> Vec<WordBox> {
    components.retain(WordBox::is_valid);
    sort_into_rows(&mut components, |_| options.same_row_threshold);

    let mut iter = components.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut envelope = first;
    let mut last = first;
    for comp in iter {
        if options.should_merge(&last, &comp) {
            envelope = envelope.union(&comp);
        } else {
            merged.push(envelope);
            envelope = comp;
        }
        last = comp;
    }
    merged.push(envelope);

    merged
}
