//! Edit distance regression test
//!
//! Literal distance vectors plus metric properties checked exhaustively
//! over short strings of a small alphabet.
//!
//! Run with:
//! ```
//! cargo test -p hocredit-metrics --test levenshtein_reg
//! ```

use hocredit_metrics::{char_distance, distance, edit_script, levenshtein};
use hocredit_test::RegParams;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Every string over `alphabet` of length `0..=max_len`
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &frontier {
            for &c in alphabet {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[test]
fn levenshtein_vectors_reg() {
    let mut rp = RegParams::new("levenshtein_vectors");

    let cases: &[(&str, &str, usize)] = &[
        ("", "", 0),
        ("a", "", 1),
        ("", "a", 1),
        ("kitten", "kitten", 0),
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("gumbo", "gambol", 2),
        ("book", "back", 2),
        ("a", "b", 1),
        ("abc", "yabd", 2),
        ("intention", "execution", 5),
        ("distance", "difference", 5),
        ("abcdef", "azced", 3),
        ("Saturday", "Sunday", 3),
        ("abcdef", "abcdef", 0),
        ("abcdef", "abcdeg", 1),
        ("abc", "abcdef", 3),
        ("abcdef", "abc", 3),
        ("longstringwithmanychars", "longstringwithanychars", 1),
        ("1234567890", "0987654321", 10),
    ];

    for &(a, b, expected) in cases {
        let (cost, counts) = distance(&chars(a), &chars(b));
        rp.compare_values(expected as f64, cost as f64, 0.0);
        rp.compare_values(expected as f64, char_distance(a, b) as f64, 0.0);
        assert_eq!(counts.reference_len(), a.chars().count(), "{a:?} vs {b:?}");
        assert_eq!(counts.candidate_len(), b.chars().count(), "{a:?} vs {b:?}");
    }

    assert!(rp.cleanup(), "levenshtein_vectors regression test failed");
}

#[test]
fn levenshtein_properties_reg() {
    let mut rp = RegParams::new("levenshtein_properties");

    let strings = all_strings(&['a', 'b', 'c'], 4);
    rp.compare_values(121.0, strings.len() as f64, 0.0);

    let empty: Vec<char> = Vec::new();
    let mut violations = 0usize;
    for a in &strings {
        let ca = chars(a);
        // Identity and empty-string base cases
        if distance(&ca, &ca).0 != 0 || levenshtein(&ca, &empty) != ca.len() {
            violations += 1;
        }
        if levenshtein(&empty, &ca) != ca.len() {
            violations += 1;
        }
        for b in &strings {
            let cb = chars(b);
            let (ab, counts) = distance(&ca, &cb);
            let (ba, _) = distance(&cb, &ca);
            if ab != ba || ab != levenshtein(&ca, &cb) {
                violations += 1;
            }
            if counts.matches + counts.substitutions + counts.deletions != ca.len()
                || counts.matches + counts.substitutions + counts.insertions != cb.len()
            {
                violations += 1;
            }
            if edit_script(&ca, &cb).len()
                != counts.matches + counts.substitutions + counts.deletions + counts.insertions
            {
                violations += 1;
            }
        }
    }
    rp.compare_values(0.0, violations as f64, 0.0);

    // Triangle inequality on a smaller alphabet
    let small: Vec<Vec<char>> = all_strings(&['a', 'b'], 4)
        .iter()
        .map(|s| chars(s))
        .collect();
    let mut triangle_violations = 0usize;
    for a in &small {
        for b in &small {
            let ab = levenshtein(a, b);
            for c in &small {
                if levenshtein(a, c) > ab + levenshtein(b, c) {
                    triangle_violations += 1;
                }
            }
        }
    }
    rp.compare_values(0.0, triangle_violations as f64, 0.0);

    assert!(rp.cleanup(), "levenshtein_properties regression test failed");
}
