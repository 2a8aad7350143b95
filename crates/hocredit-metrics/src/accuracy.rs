//! Transcription accuracy
//!
//! Compares a reference transcription with a corrected or machine-produced
//! candidate at two granularities:
//!
//! - characters (Unicode scalar values), giving `character_similarity`
//! - whitespace-delimited word tokens, giving the word alignment counts,
//!   `word_accuracy`, `word_error_rate` and `word_similarity`
//!
//! Every ratio divides by `max(1, reference length)`, so an empty
//! reference still produces defined metrics instead of an error.

use crate::edit_distance::{AlignmentResult, distance, levenshtein};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Case handling for comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseSensitivity {
    /// "Word" and "word" differ
    #[default]
    Sensitive,
    /// Both texts are lowercased before comparison
    Insensitive,
}

/// Options for accuracy scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccuracyOptions {
    /// Applies to both the character and the word comparison
    pub case_sensitivity: CaseSensitivity,
}

impl AccuracyOptions {
    /// Set the case handling
    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }

    fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.case_sensitivity {
            CaseSensitivity::Sensitive => Cow::Borrowed(text),
            CaseSensitivity::Insensitive => Cow::Owned(text.to_lowercase()),
        }
    }
}

/// Accuracy of one candidate transcription against its reference
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracyMetrics {
    /// `1 - char_distance / max(1, reference chars)`, clamped to [0, 1]
    pub character_similarity: f64,
    /// `1 - word_error_rate`, clamped to [0, 1]
    pub word_similarity: f64,
    /// `correct_words / max(1, total_words_original)`
    pub word_accuracy: f64,
    /// `(substitutions + deletions + insertions) / max(1, total_words_original)`;
    /// may exceed 1
    pub word_error_rate: f64,
    pub total_words_original: usize,
    pub total_words_transcribed: usize,
    pub correct_words: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AccuracyMetrics {
    /// Word alignment counts
    pub fn word_alignment(&self) -> AlignmentResult {
        AlignmentResult {
            matches: self.correct_words,
            substitutions: self.substitutions,
            deletions: self.deletions,
            insertions: self.insertions,
        }
    }
}

/// Split text into whitespace-delimited word tokens
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Score with the default (case-sensitive) options
///
/// # Examples
///
/// ```
/// use hocredit_metrics::score;
///
/// let m = score("the quick brown fox", "the quick brown fox");
/// assert_eq!(m.word_accuracy, 1.0);
/// assert_eq!(m.word_error_rate, 0.0);
/// ```
pub fn score(original: &str, corrected: &str) -> AccuracyMetrics {
    score_with_options(original, corrected, &AccuracyOptions::default())
}

/// Score `corrected` against the reference `original`
pub fn score_with_options(
    original: &str,
    corrected: &str,
    options: &AccuracyOptions,
) -> AccuracyMetrics {
    let original = options.normalize(original);
    let corrected = options.normalize(corrected);

    let ref_chars: Vec<char> = original.chars().collect();
    let cand_chars: Vec<char> = corrected.chars().collect();
    let char_distance = levenshtein(&ref_chars, &cand_chars);
    let character_similarity = similarity(char_distance, ref_chars.len());

    let ref_words = tokenize_words(&original);
    let cand_words = tokenize_words(&corrected);
    let (word_distance, words) = distance(&ref_words, &cand_words);

    let denom = ref_words.len().max(1) as f64;
    let word_accuracy = words.matches as f64 / denom;
    let word_error_rate = word_distance as f64 / denom;
    let word_similarity = (1.0 - word_error_rate).clamp(0.0, 1.0);

    log::debug!(
        "char distance {char_distance}/{}, word distance {word_distance}/{} ({words:?})",
        ref_chars.len(),
        ref_words.len()
    );

    AccuracyMetrics {
        character_similarity,
        word_similarity,
        word_accuracy,
        word_error_rate,
        total_words_original: ref_words.len(),
        total_words_transcribed: cand_words.len(),
        correct_words: words.matches,
        substitutions: words.substitutions,
        deletions: words.deletions,
        insertions: words.insertions,
    }
}

fn similarity(distance: usize, reference_len: usize) -> f64 {
    (1.0 - distance as f64 / reference_len.max(1) as f64).clamp(0.0, 1.0)
}

/// Totals over several scored pages
///
/// Ratios are micro-averaged: edit counts are summed over all pages before
/// dividing, so long pages weigh more than short ones. Character
/// similarity, which has no per-page counts here, is a plain mean.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub pages: usize,
    pub total_words_original: usize,
    pub total_words_transcribed: usize,
    pub correct_words: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
    pub word_accuracy: f64,
    pub word_error_rate: f64,
    pub mean_character_similarity: f64,
}

impl AccuracySummary {
    /// Summarize per-page metrics
    pub fn from_metrics(metrics: &[AccuracyMetrics]) -> Self {
        let mut s = Self {
            pages: metrics.len(),
            ..Self::default()
        };
        let mut char_sim_sum = 0.0;
        for m in metrics {
            s.total_words_original += m.total_words_original;
            s.total_words_transcribed += m.total_words_transcribed;
            s.correct_words += m.correct_words;
            s.substitutions += m.substitutions;
            s.deletions += m.deletions;
            s.insertions += m.insertions;
            char_sim_sum += m.character_similarity;
        }

        let denom = s.total_words_original.max(1) as f64;
        s.word_accuracy = s.correct_words as f64 / denom;
        s.word_error_rate = (s.substitutions + s.deletions + s.insertions) as f64 / denom;
        if s.pages > 0 {
            s.mean_character_similarity = char_sim_sum / s.pages as f64;
        }
        s
    }
}
