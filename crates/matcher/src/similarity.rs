//! Bounded similarity between canonical business names.
//!
//! Scores live in [0, 1]:
//!
//! - identical, non-empty canonical forms score 1.0
//! - an empty canonical form on either side scores 0.0
//! - containment (a bank field truncating a long name) scores
//!   `min_len / max_len * 0.9`, capped below equality
//! - everything else scores `1 - levenshtein / max_len`
//!
//! Lengths are counted in characters, not bytes.

use canonical::canonicalize;

/// Weight applied to the length ratio when one name contains the other.
pub const CONTAINMENT_WEIGHT: f32 = 0.9;

/// Classic Levenshtein distance over characters: unit-cost insertion,
/// deletion and substitution.
///
/// ```rust
/// use matcher::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("フヤケレウ", "フヤケレオ"), 1);
/// assert_eq!(levenshtein("", "ABC"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the DP table are enough; row i only reads row i - 1.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity of two strings that are already canonical.
///
/// ```rust
/// use matcher::similarity_canonical;
///
/// assert_eq!(similarity_canonical("ABC", "ABC"), 1.0);
/// assert_eq!(similarity_canonical("", ""), 0.0);
/// assert_eq!(similarity_canonical("ABCD", "AB"), 0.45);
/// ```
pub fn similarity_canonical(a: &str, b: &str) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b) as f32;

    if a.contains(b) || b.contains(a) {
        let min_len = len_a.min(len_b) as f32;
        return min_len / max_len * CONTAINMENT_WEIGHT;
    }

    let distance = levenshtein(a, b) as f32;
    (1.0 - distance / max_len).clamp(0.0, 1.0)
}

/// Similarity of two raw names: canonicalize both, then score.
///
/// ```rust
/// use matcher::similarity;
///
/// assert_eq!(similarity("ｶ)ﾌﾔｹﾚｳ", "(株)フヤケレウ"), 1.0);
/// assert_eq!(similarity("", "ABC"), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f32 {
    similarity_canonical(&canonicalize(a), &canonicalize(b))
}
