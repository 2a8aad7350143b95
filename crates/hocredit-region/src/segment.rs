//! Word and line segmentation
//!
//! Runs the full pipeline on a pixel grid:
//!
//! 1. classify every pixel as text or background
//! 2. label connected components of text pixels
//! 3. drop components outside plausible word size
//! 4. merge adjacent fragments into words
//! 5. group words into lines
//!
//! Only geometry is produced; no text is ever assigned to a region.

use crate::classify::{ClassifierOptions, classify_grid};
use crate::conncomp::{ConnectivityType, components_from_mask};
use crate::error::{RegionError, RegionResult};
use crate::merge::{MergeOptions, merge_components};
use crate::select::{SizeBounds, filter_components};
use crate::textline::{LineOptions, group_into_lines};
use hocredit_core::{LineBox, PixelGrid, WordBox};
use serde::{Deserialize, Serialize};

/// Options for segmentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentationOptions {
    /// Pixel classification
    pub classifier: ClassifierOptions,
    /// Neighbourhood used by the flood fill (default: 8-way)
    pub connectivity: ConnectivityType,
    /// Plausible word size
    pub size_bounds: SizeBounds,
    /// Fragment merging
    pub merge: MergeOptions,
    /// Line grouping
    pub lines: LineOptions,
}

impl SegmentationOptions {
    /// Set the classifier options
    pub fn with_classifier(mut self, classifier: ClassifierOptions) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the flood fill connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Set the word size bounds
    pub fn with_size_bounds(mut self, bounds: SizeBounds) -> Self {
        self.size_bounds = bounds;
        self
    }

    /// Set the merge options
    pub fn with_merge(mut self, merge: MergeOptions) -> Self {
        self.merge = merge;
        self
    }

    /// Set the line options
    pub fn with_lines(mut self, lines: LineOptions) -> Self {
        self.lines = lines;
        self
    }

    /// Check all parameters
    pub fn validate(&self) -> RegionResult<()> {
        self.size_bounds.validate()?;
        self.merge.validate()?;
        self.lines.validate()
    }
}

/// Segmentation output for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
    /// Lines, top to bottom
    pub lines: Vec<LineBox>,
}

impl PageLayout {
    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of words across all lines
    pub fn word_count(&self) -> usize {
        self.lines.iter().map(LineBox::len).sum()
    }

    /// All words in reading order
    pub fn words(&self) -> impl Iterator<Item = &WordBox> {
        self.lines.iter().flat_map(|line| line.words.iter())
    }

    /// Check if no text was found
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn check_grid<G: PixelGrid + ?Sized>(grid: &G) -> RegionResult<()> {
    if grid.is_empty() {
        return Err(RegionError::EmptyImage {
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(())
}

/// Detect word boxes without grouping them into lines
///
/// # Errors
///
/// Returns [`RegionError::EmptyImage`] for a zero-sized grid and
/// [`RegionError::InvalidParameters`] for invalid options.
pub fn detect_words<G: PixelGrid + ?Sized>(
    grid: &G,
    options: &SegmentationOptions,
) -> RegionResult<Vec<WordBox>> {
    check_grid(grid)?;
    options.validate()?;

    let (width, height) = (grid.width(), grid.height());
    let mask = classify_grid(grid, &options.classifier);
    let raw: Vec<WordBox> = components_from_mask(&mask, options.connectivity)
        .into_iter()
        .map(|c| c.bounds)
        .collect();
    let raw_count = raw.len();

    let kept = filter_components(raw, width, height, &options.size_bounds);
    let kept_count = kept.len();

    let words = merge_components(kept, &options.merge);
    log::debug!(
        "{width}x{height}: {raw_count} components, {kept_count} word-sized, {} words after merge",
        words.len()
    );

    Ok(words)
}

/// Segment a page into lines of words
pub fn segment_lines<G: PixelGrid + ?Sized>(
    grid: &G,
    options: &SegmentationOptions,
) -> RegionResult<Vec<LineBox>> {
    let words = detect_words(grid, options)?;
    let lines = group_into_lines(words, &options.lines);
    log::debug!("grouped into {} lines", lines.len());
    Ok(lines)
}

/// Segment a page and return its layout
pub fn segment_page<G: PixelGrid + ?Sized>(
    grid: &G,
    options: &SegmentationOptions,
) -> RegionResult<PageLayout> {
    let lines = segment_lines(grid, options)?;
    Ok(PageLayout {
        width: grid.width(),
        height: grid.height(),
        lines,
    })
}
