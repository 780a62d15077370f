//! Ratcliff-Obershelp (gestalt pattern matching)
//!
//! Finds the longest common substring, then repeats on the unmatched pieces
//! to its left and right. The similarity is `2M / (la + lb)` where `M` is the
//! total number of matched units; the distance is one minus that.
//!
//! The pieces are kept on an explicit stack, so deep splits do not recurse.
//! Ties between equally long substrings go to the first found, which depends
//! on operand order, so operands are put into a canonical order first.

use super::{canonical, chars, Unit};
use smallvec::{smallvec, SmallVec};

/// Start in `a`, start in `b` and length of the first longest common substring.
fn longest_match<T: Unit>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    if a.is_empty() || b.is_empty() {
        return (0, 0, 0);
    }

    let n = b.len();
    let mut prev: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let (mut best_a, mut best_b, mut best_len) = (0, 0, 0);

    for i in 1..=a.len() {
        for j in 1..=n {
            curr[j] = if a[i - 1] == b[j - 1] {
                prev[j - 1] + 1
            } else {
                0
            };
            if curr[j] > best_len {
                best_len = curr[j];
                best_a = i - best_len;
                best_b = j - best_len;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_a, best_b, best_len)
}

/// Units matched by repeated longest-common-substring splitting.
#[must_use]
pub fn ratcliff_obershelp_matches_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let (a, b) = canonical(a, b);
    let mut matched = 0;
    let mut pending: SmallVec<[(usize, usize, usize, usize); 16]> =
        smallvec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, len) = longest_match(&a[a_lo..a_hi], &b[b_lo..b_hi]);
        if len == 0 {
            continue;
        }
        matched += len;
        pending.push((a_lo, a_lo + i, b_lo, b_lo + j));
        pending.push((a_lo + i + len, a_hi, b_lo + j + len, b_hi));
    }

    matched
}

/// Ratcliff-Obershelp distance in [0, 1]. Two empty inputs are identical.
#[must_use]
pub fn ratcliff_obershelp_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matched = ratcliff_obershelp_matches_units(a, b);
    1.0 - (2 * matched) as f64 / total as f64
}

#[inline]
#[must_use]
pub fn ratcliff_obershelp_distance(a: &str, b: &str) -> f64 {
    ratcliff_obershelp_distance_units(&chars(a), &chars(b))
}
