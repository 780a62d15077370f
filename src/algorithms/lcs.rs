//! Longest Common Subsequence (LCS) and Longest Common Substring
//!
//! Both lengths are similarities; the distances exposed here are
//! `max(len_a, len_b) - length`, which is 0 for identical inputs and
//! `max(len_a, len_b)` when nothing is shared.
//!
//! # Complexity
//! - Time: O(m·n)
//! - Space: O(n), two rolling rows

use super::{chars, common_prefix, common_suffix, Unit};
use smallvec::SmallVec;

/// Length of the longest common subsequence of two unit slices.
#[must_use]
pub fn lcs_length_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    // Shared prefix and suffix always belong to some LCS
    let prefix = common_prefix(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a, b);
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return prefix + suffix;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr[0] = 0;
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
            } else {
                curr[j] = prev[j].max(curr[j - 1]);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prefix + suffix + prev[n]
}

/// Length of the longest common substring (contiguous) of two unit slices.
#[must_use]
pub fn longest_common_substring_length_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return 0;
    }

    let mut prev: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut max_len = 0;

    for i in 1..=m {
        curr[0] = 0;
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
                max_len = max_len.max(curr[j]);
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    max_len
}

/// Subsequence distance: `max(len_a, len_b) - lcs_length`.
#[inline]
#[must_use]
pub fn lcs_seq_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len().max(b.len()) - lcs_length_units(a, b)
}

/// Substring distance: `max(len_a, len_b) - longest_common_substring_length`.
#[inline]
#[must_use]
pub fn lcs_str_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len().max(b.len()) - longest_common_substring_length_units(a, b)
}

/// Calculate the length of the Longest Common Subsequence.
#[must_use]
pub fn lcs_length(a: &str, b: &str) -> usize {
    lcs_length_units(&chars(a), &chars(b))
}

/// Length of the longest common substring, in `char`s.
#[must_use]
pub fn longest_common_substring_length(a: &str, b: &str) -> usize {
    longest_common_substring_length_units(&chars(a), &chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcs_length() {
        assert_eq!(lcs_length("", ""), 0);
        assert_eq!(lcs_length("abc", "abc"), 3);
        assert_eq!(lcs_length("abc", "def"), 0);
        assert_eq!(lcs_length("ABCDGH", "AEDFHR"), 3); // ADH
        assert_eq!(lcs_length("AGGTAB", "GXTXAYB"), 4); // GTAB
    }

    #[test]
    fn test_longest_common_substring() {
        assert_eq!(longest_common_substring_length("abcdef", "zbcdf"), 3); // bcd
        assert_eq!(longest_common_substring_length("", "abc"), 0);
        assert_eq!(longest_common_substring_length("xyz", "abc"), 0);
    }

    #[test]
    fn test_lcs_distances() {
        let (a, b) = (chars("kitten"), chars("sitting"));
        // LCS "ittn" (4), longest substring "itt" (3)
        assert_eq!(lcs_seq_distance_units(&a, &b), 3);
        assert_eq!(lcs_str_distance_units(&a, &b), 4);
        assert_eq!(lcs_seq_distance_units::<char>(&[], &[]), 0);
        assert_eq!(lcs_seq_distance_units(&chars(""), &chars("abc")), 3);
        assert_eq!(lcs_str_distance_units(&chars("abc"), &chars("abc")), 0);
    }
}
