//! Text line grouping
//!
//! Words are bucketed into rows (a word shares its row anchor's row when
//! their tops differ by less than half the anchor's height), then walked
//! in reading order. A word joins the open line when its vertical span
//! intersects the line's span widened by a third of the line's average
//! word height; otherwise the line is closed and a new one begins.

use crate::error::{RegionError, RegionResult};
use crate::order::sort_into_rows;
use hocredit_core::{LineBox, WordBox};
use serde::{Deserialize, Serialize};

/// Options for line grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOptions {
    /// Line tolerance is `average_word_height / tolerance_divisor`
    pub tolerance_divisor: i32,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            tolerance_divisor: 3,
        }
    }
}

impl LineOptions {
    /// Set the tolerance divisor
    pub fn with_tolerance_divisor(mut self, divisor: i32) -> Self {
        self.tolerance_divisor = divisor;
        self
    }

    /// Check the parameters
    pub fn validate(&self) -> RegionResult<()> {
        if self.tolerance_divisor <= 0 {
            return Err(RegionError::InvalidParameters(format!(
                "line tolerance divisor must be positive, got {}",
                self.tolerance_divisor
            )));
        }
        Ok(())
    }
}

/// Vertical extent of the open line
struct OpenLine {
    words: Vec<WordBox>,
    top: i32,
    bottom: i32,
    height_sum: i64,
}

impl OpenLine {
    fn new(word: WordBox) -> Self {
        Self {
            words: vec![word],
            top: word.y,
            bottom: word.bottom(),
            height_sum: word.height as i64,
        }
    }

    fn accepts(&self, word: &WordBox, divisor: i32) -> bool {
        let avg_height = (self.height_sum / self.words.len() as i64) as i32;
        let tolerance = avg_height / divisor.max(1);
        word.bottom() >= self.top - tolerance && word.y <= self.bottom + tolerance
    }

    fn push(&mut self, word: WordBox) {
        self.top = self.top.min(word.y);
        self.bottom = self.bottom.max(word.bottom());
        self.height_sum += word.height as i64;
        self.words.push(word);
    }
}

/// Group words into text lines
///
/// Degenerate words are dropped. Lines are returned top-to-bottom with
/// their words ordered left-to-right.
pub fn group_into_lines(mut words: Vec<WordBox>, options: &LineOptions) -> Vec<LineBox> {
    words.retain(WordBox::is_valid);
    sort_into_rows(&mut words, |anchor| anchor.height / 2);

    let mut lines = Vec::new();
    let mut open: Option<OpenLine> = None;
    for word in words {
        match open.as_mut() {
            Some(line) if line.accepts(&word, options.tolerance_divisor) => line.push(word),
            _ => {
                if let Some(done) = open.replace(OpenLine::new(word)) {
                    lines.extend(LineBox::from_words(done.words));
                }
            }
        }
    }
    if let Some(done) = open {
        lines.extend(LineBox::from_words(done.words));
    }

    lines
}
