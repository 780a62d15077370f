//! Smith-Waterman local alignment
//!
//! Scores the best-matching local region of two sequences with a match reward
//! of 1 and mismatch and gap penalties of 1. Cells never drop below zero, so
//! an alignment restarts wherever the running score would turn negative.
//!
//! The distance is `max(la, lb) - score`. A perfect local alignment covers at
//! most the shorter input, so only identical inputs reach distance 0.
//!
//! # Complexity
//! - Time: O(m*n)
//! - Space: O(n), two rows

use super::{chars, Unit};
use smallvec::{smallvec, SmallVec};

/// Best local alignment score.
#[must_use]
pub fn smith_waterman_score_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let n = b.len();
    let mut prev: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut best = 0;

    for &ca in a {
        curr[0] = 0;
        for j in 1..=n {
            let diagonal = if ca == b[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j - 1].saturating_sub(1)
            };
            let up = prev[j].saturating_sub(1);
            let left = curr[j - 1].saturating_sub(1);
            curr[j] = diagonal.max(up).max(left);
            best = best.max(curr[j]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

/// Smith-Waterman distance, `max(la, lb) - score`.
#[inline]
#[must_use]
pub fn smith_waterman_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len()
        .max(b.len())
        .saturating_sub(smith_waterman_score_units(a, b))
}

#[inline]
#[must_use]
pub fn smith_waterman_distance(a: &str, b: &str) -> usize {
    smith_waterman_distance_units(&chars(a), &chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> usize {
        smith_waterman_score_units(&chars(a), &chars(b))
    }

    #[test]
    fn test_local_region_scores() {
        assert_eq!(score("abc", "abc"), 3);
        assert_eq!(score("xabcx", "yabcy"), 3);
        assert_eq!(score("abc", "xyz"), 0);
        // i t t (e|i) n: the mismatch costs one
        assert_eq!(score("kitten", "sitting"), 3);
    }

    #[test]
    fn test_distance() {
        assert_eq!(smith_waterman_distance("", ""), 0);
        assert_eq!(smith_waterman_distance("", "abc"), 3);
        assert_eq!(smith_waterman_distance("abc", "abc"), 0);
        assert_eq!(smith_waterman_distance("abcxyz", "abc"), 3);
        assert_eq!(smith_waterman_distance("xabcx", "yabcy"), 2);
        assert_eq!(smith_waterman_distance("kitten", "sitting"), 4);
        assert_eq!(
            smith_waterman_distance("kitten", "sitting"),
            smith_waterman_distance("sitting", "kitten")
        );
    }

    #[test]
    fn test_gap_inside_alignment() {
        // abc-d against abcxd: four matches, one gap
        assert_eq!(score("abcd", "abcxd"), 3);
        assert_eq!(score("abcdef", "abcxdef"), 5);
    }
}
