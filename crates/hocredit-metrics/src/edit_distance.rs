//! Edit distance
//!
//! Unweighted Levenshtein distance over any sequence whose elements can be
//! compared for equality: characters for character-level accuracy, word
//! tokens for word-level accuracy.
//!
//! The full `(n + 1) x (m + 1)` cost matrix is kept so the alignment can be
//! recovered by backtracking from the last cell. When several predecessor
//! cells explain the same cost, the backtrack prefers, in order:
//!
//! 1. match
//! 2. substitution
//! 3. deletion (element of the reference missing from the candidate)
//! 4. insertion (extra element in the candidate)
//!
//! The tie-break changes which edits are reported, never the distance.

use serde::{Deserialize, Serialize};

/// One step of an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Reference and candidate elements are equal
    Match,
    /// Reference element replaced by a different candidate element
    Substitute,
    /// Reference element absent from the candidate
    Delete,
    /// Candidate element absent from the reference
    Insert,
}

/// Operation counts of one alignment
///
/// `matches + substitutions + deletions` is the reference length and
/// `matches + substitutions + insertions` the candidate length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlignmentResult {
    pub matches: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AlignmentResult {
    /// Tally an edit script
    pub fn from_ops(ops: &[EditOp]) -> Self {
        let mut counts = Self::default();
        for op in ops {
            match op {
                EditOp::Match => counts.matches += 1,
                EditOp::Substitute => counts.substitutions += 1,
                EditOp::Delete => counts.deletions += 1,
                EditOp::Insert => counts.insertions += 1,
            }
        }
        counts
    }

    /// Total edit cost
    pub fn cost(&self) -> usize {
        self.substitutions + self.deletions + self.insertions
    }

    /// Length of the reference sequence
    pub fn reference_len(&self) -> usize {
        self.matches + self.substitutions + self.deletions
    }

    /// Length of the candidate sequence
    pub fn candidate_len(&self) -> usize {
        self.matches + self.substitutions + self.insertions
    }
}

/// Row-major DP cost matrix
struct CostMatrix {
    cols: usize,
    cells: Vec<usize>,
}

impl CostMatrix {
    fn build<T: PartialEq>(reference: &[T], candidate: &[T]) -> Self {
        let rows = reference.len() + 1;
        let cols = candidate.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }
        for i in 1..rows {
            cells[i * cols] = i;
            for j in 1..cols {
                let sub = usize::from(reference[i - 1] != candidate[j - 1]);
                let diag = cells[(i - 1) * cols + j - 1] + sub;
                let up = cells[(i - 1) * cols + j] + 1;
                let left = cells[i * cols + j - 1] + 1;
                cells[i * cols + j] = diag.min(up).min(left);
            }
        }

        Self { cols, cells }
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}

/// Compute the distance and the operation counts of an optimal alignment
///
/// # Examples
///
/// ```
/// use hocredit_metrics::distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// let (cost, counts) = distance(&a, &b);
/// assert_eq!(cost, 3);
/// assert_eq!(counts.substitutions, 2);
/// assert_eq!(counts.insertions, 1);
/// ```
pub fn distance<T: PartialEq>(reference: &[T], candidate: &[T]) -> (usize, AlignmentResult) {
    let counts = AlignmentResult::from_ops(&edit_script(reference, candidate));
    (counts.cost(), counts)
}

/// Recover the full edit script, in reference order
pub fn edit_script<T: PartialEq>(reference: &[T], candidate: &[T]) -> Vec<EditOp> {
    let d = CostMatrix::build(reference, candidate);
    let (mut i, mut j) = (reference.len(), candidate.len());
    let mut ops = Vec::with_capacity(i.max(j));

    while i > 0 || j > 0 {
        let here = d.at(i, j);
        let op = if i > 0
            && j > 0
            && reference[i - 1] == candidate[j - 1]
            && here == d.at(i - 1, j - 1)
        {
            EditOp::Match
        } else if i > 0 && j > 0 && here == d.at(i - 1, j - 1) + 1 {
            EditOp::Substitute
        } else if i > 0 && here == d.at(i - 1, j) + 1 {
            EditOp::Delete
        } else {
            EditOp::Insert
        };

        match op {
            EditOp::Match | EditOp::Substitute => {
                i -= 1;
                j -= 1;
            }
            EditOp::Delete => i -= 1,
            EditOp::Insert => j -= 1,
        }
        ops.push(op);
    }

    ops.reverse();
    ops
}

/// Distance only, in `O(min(n, m))` memory
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let sub = prev[j] + usize::from(x != y);
            curr[j + 1] = sub.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Character-level distance between two strings
pub fn char_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_base_cases() {
        let empty: Vec<char> = Vec::new();
        assert_eq!(distance(&empty, &empty), (0, AlignmentResult::default()));

        let (cost, counts) = distance(&empty, &chars("abc"));
        assert_eq!(cost, 3);
        assert_eq!(counts.insertions, 3);

        let (cost, counts) = distance(&chars("abc"), &empty);
        assert_eq!(cost, 3);
        assert_eq!(counts.deletions, 3);
    }

    #[test]
    fn test_tie_break_prefers_substitution_over_indel() {
        // "ab" -> "ba": two substitutions or delete+insert, both cost 2
        let ops = edit_script(&chars("ab"), &chars("ba"));
        assert_eq!(ops, vec![EditOp::Substitute, EditOp::Substitute]);
    }

    #[test]
    fn test_tie_break_prefers_deletion_over_insertion() {
        // Trailing element: "abc" vs "ab" ends with a deletion
        let ops = edit_script(&chars("abc"), &chars("ab"));
        assert_eq!(ops, vec![EditOp::Match, EditOp::Match, EditOp::Delete]);

        let ops = edit_script(&chars("ab"), &chars("abc"));
        assert_eq!(ops, vec![EditOp::Match, EditOp::Match, EditOp::Insert]);
    }

    #[test]
    fn test_script_is_in_reference_order() {
        let ops = edit_script(&chars("kitten"), &chars("sitting"));
        assert_eq!(
            ops,
            vec![
                EditOp::Substitute,
                EditOp::Match,
                EditOp::Match,
                EditOp::Match,
                EditOp::Substitute,
                EditOp::Match,
                EditOp::Insert,
            ]
        );
    }

    #[test]
    fn test_levenshtein_agrees_with_matrix() {
        let cases = [("flaw", "lawn"), ("", "xyz"), ("gumbo", "gambol"), ("abc", "")];
        for (a, b) in cases {
            let (cost, _) = distance(&chars(a), &chars(b));
            assert_eq!(levenshtein(&chars(a), &chars(b)), cost, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn test_generic_over_words() {
        let a = ["the", "quick", "brown", "fox"];
        let b = ["the", "quack", "fox"];
        let (cost, counts) = distance(&a, &b);
        assert_eq!(cost, 2);
        assert_eq!(counts.matches, 2);
        assert_eq!(counts.reference_len(), 4);
        assert_eq!(counts.candidate_len(), 3);
    }

    #[test]
    fn test_char_distance_counts_scalar_values() {
        assert_eq!(char_distance("café", "cafe"), 1);
        assert_eq!(char_distance("日本語", "日本"), 1);
    }
}
