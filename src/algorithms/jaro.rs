//! Jaro and Jaro-Winkler
//!
//! Jaro counts units that match within a window of half the longer operand,
//! penalizing out-of-order matches. Jaro-Winkler raises the score of pairs
//! sharing a short prefix.
//!
//! Both are similarities in [0.0, 1.0]; the `*_distance` forms return
//! `1.0 - similarity`, so 0.0 means identical.
//!
//! The greedy match search depends on which operand is scanned first, so the
//! operands are put into a canonical order before matching. This makes every
//! function here exactly symmetric.

use super::{canonical, chars, Unit};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default Jaro-Winkler prefix weight
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;

/// Default maximum prefix length considered by Jaro-Winkler
pub const DEFAULT_MAX_PREFIX_LENGTH: usize = 4;

/// Largest prefix weight that keeps Jaro-Winkler within [0.0, 1.0]
pub const MAX_PREFIX_WEIGHT: f64 = 0.25;

/// Jaro-Winkler parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JaroWinklerConfig {
    /// Boost per shared prefix unit, in [0.0, 0.25]
    pub prefix_weight: f64,
    /// Shared prefix units beyond this many earn no further boost
    pub max_prefix_length: usize,
}

impl Default for JaroWinklerConfig {
    fn default() -> Self {
        Self {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            max_prefix_length: DEFAULT_MAX_PREFIX_LENGTH,
        }
    }
}

impl JaroWinklerConfig {
    #[must_use]
    pub fn new(prefix_weight: f64, max_prefix_length: usize) -> Self {
        Self {
            prefix_weight,
            max_prefix_length,
        }
    }
}

/// Jaro similarity between two unit slices.
///
/// # Complexity
/// - Time: O(m·w) where w is the match window
/// - Space: O(m+n) for match flags
#[must_use]
pub fn jaro_similarity_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (a, b) = canonical(a, b);
    let a_len = a.len();
    let b_len = b.len();

    let match_distance = (a_len.max(b_len) / 2).saturating_sub(1);

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for i in 0..a_len {
        let start = i.saturating_sub(match_distance);
        let end = (i + match_distance + 1).min(b_len);

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Matched units of `a` and `b`, in order, pair up one to one
    let a_seq = a.iter().zip(a_matched.iter()).filter(|&(_, &m)| m).map(|(u, _)| u);
    let b_seq = b.iter().zip(b_matched.iter()).filter(|&(_, &m)| m).map(|(u, _)| u);
    let half_transpositions = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();

    let m = matches as f64;
    let t = (half_transpositions / 2) as f64;

    (m / a_len as f64 + m / b_len as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity between two unit slices.
///
/// `prefix_weight` is clamped to [0.0, 0.25] so the result stays in [0.0, 1.0].
#[must_use]
pub fn jaro_winkler_similarity_units<T: Unit>(
    a: &[T],
    b: &[T],
    prefix_weight: f64,
    max_prefix_length: usize,
) -> f64 {
    let jaro_sim = jaro_similarity_units(a, b);

    if jaro_sim == 0.0 {
        return 0.0;
    }

    let prefix_weight = prefix_weight.clamp(0.0, MAX_PREFIX_WEIGHT);

    let prefix_len = a
        .iter()
        .zip(b.iter())
        .take(max_prefix_length)
        .take_while(|(x, y)| x == y)
        .count();

    (jaro_sim + (prefix_len as f64 * prefix_weight * (1.0 - jaro_sim))).min(1.0)
}

/// Jaro similarity between two strings, counted in `char`s.
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    jaro_similarity_units(&chars(a), &chars(b))
}

/// Jaro-Winkler similarity with weight 0.1 and a four-unit prefix cap.
#[inline]
#[must_use]
pub fn jaro_winkler_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    jaro_winkler_similarity_units(
        &chars(a),
        &chars(b),
        DEFAULT_PREFIX_WEIGHT,
        DEFAULT_MAX_PREFIX_LENGTH,
    )
}

/// `1.0 - jaro_similarity(a, b)`
#[inline]
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

#[inline]
#[must_use]
pub fn jaro_winkler_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_winkler_similarity(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-3
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(jaro_similarity("", ""), 1.0);
        assert_eq!(jaro_similarity("same", "same"), 1.0);
        assert_eq!(jaro_similarity("", "xyz"), 0.0);
        assert_eq!(jaro_similarity("abc", "def"), 0.0);
    }

    #[test]
    fn test_reference_values() {
        let cases = [
            ("MARTHA", "MARHTA", 0.944, 0.961),
            ("DWAYNE", "DUANE", 0.822, 0.840),
            ("DIXON", "DICKSONX", 0.767, 0.813),
            ("JELLYFISH", "SMELLYFISH", 0.896, 0.896),
        ];
        for (a, b, jaro, jaro_winkler) in cases {
            assert!(close(jaro_similarity(a, b), jaro), "jaro {} {}", a, b);
            assert!(
                close(jaro_winkler_similarity(a, b), jaro_winkler),
                "jaro_winkler {} {}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_shared_prefix_raises_score() {
        let (a, b) = (chars("prefixed"), chars("prefixes"));
        let plain = jaro_similarity_units(&a, &b);
        assert!(jaro_winkler_similarity_units(&a, &b, 0.1, 4) > plain);
        assert_eq!(jaro_winkler_similarity_units(&a, &b, 0.0, 4), plain);
        assert_eq!(jaro_winkler_similarity_units(&a, &b, 0.1, 0), plain);
    }

    #[test]
    fn test_distances() {
        assert_eq!(jaro_distance("abc", "abc"), 0.0);
        assert_eq!(jaro_distance("", "abc"), 1.0);
        assert_eq!(jaro_winkler_distance("", ""), 0.0);
    }

    #[test]
    fn test_jaro_symmetric() {
        let pairs = [("MARTHA", "MARHTA"), ("abcab", "bcaab"), ("ab", "bca"), ("aab", "aba")];
        for (a, b) in pairs {
            assert_eq!(jaro_similarity(a, b), jaro_similarity(b, a));
            assert_eq!(jaro_winkler_similarity(a, b), jaro_winkler_similarity(b, a));
        }
    }

    #[test]
    fn test_prefix_weight_clamped() {
        let (a, b) = (chars("prefixed"), chars("prefixes"));
        let sim = jaro_winkler_similarity_units(&a, &b, 5.0, 4);
        assert!(sim <= 1.0);
        assert_eq!(sim, jaro_winkler_similarity_units(&a, &b, MAX_PREFIX_WEIGHT, 4));
    }
}
