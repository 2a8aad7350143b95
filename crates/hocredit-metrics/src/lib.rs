//! hocredit-metrics - Edit distance and transcription accuracy
//!
//! - [`distance`] / [`edit_script`] / [`levenshtein`] - Levenshtein distance
//!   over any comparable sequence, with alignment recovery
//! - [`score`] / [`score_with_options`] - Character- and word-level accuracy
//!   of a transcription against a reference
//! - [`AccuracySummary`] - Totals over many scored pages
//!
//! All functions are pure and allocate their working memory per call.

pub mod accuracy;
pub mod edit_distance;

pub use accuracy::{
    AccuracyMetrics, AccuracyOptions, AccuracySummary, CaseSensitivity, score,
    score_with_options, tokenize_words,
};
pub use edit_distance::{
    AlignmentResult, EditOp, char_distance, distance, edit_script, levenshtein,
};
