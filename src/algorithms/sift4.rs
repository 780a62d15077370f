//! Sift4 string distance
//!
//! A fast approximation of edit distance. Two cursors walk both inputs; on a
//! mismatch each side looks up to `max_offset` units ahead for the other's
//! current unit and jumps there. The distance is the longer length minus the
//! units matched along the way.
//!
//! Two variants:
//! - **simple**: counts matches only
//! - **common**: also counts transpositions, so "ab" against "ba" costs the
//!   same as one substitution rather than two
//!
//! The scan is not symmetric, so operands are put into a canonical order
//! first. Results are an approximation and may exceed Levenshtein distance.
//!
//! # Complexity
//! - Time: O((m+n)·max_offset) for the simple variant; the common variant adds
//!   a scan over pending offsets per match
//! - Space: O(1) for simple, O(max_offset) offsets for common

use super::{canonical, chars, Unit};
use smallvec::SmallVec;

/// Look-ahead window used by the registered Sift4 metrics
pub const DEFAULT_MAX_OFFSET: usize = 5;

/// Sift4 without transposition tracking.
#[must_use]
pub fn sift4_simple_units<T: Unit>(a: &[T], b: &[T], max_offset: usize) -> usize {
    let (s1, s2) = canonical(a, b);
    let (l1, l2) = (s1.len(), s2.len());

    if l1 == 0 {
        return l2;
    }
    if l2 == 0 {
        return l1;
    }

    let mut c1 = 0usize;
    let mut c2 = 0usize;
    let mut lcss = 0usize;
    let mut local_cs = 0usize;

    while c1 < l1 && c2 < l2 {
        if s1[c1] == s2[c2] {
            local_cs += 1;
        } else {
            lcss += local_cs;
            local_cs = 0;
            if c1 != c2 {
                c1 = c1.max(c2);
                c2 = c1;
            }
            for i in 0..max_offset {
                if c1 + i < l1 && c2 < l2 && s1[c1 + i] == s2[c2] {
                    c1 += i;
                    local_cs += 1;
                    break;
                }
                if c2 + i < l2 && c1 < l1 && s1[c1] == s2[c2 + i] {
                    c2 += i;
                    local_cs += 1;
                    break;
                }
            }
        }
        c1 += 1;
        c2 += 1;
    }

    lcss += local_cs;
    l1.max(l2).saturating_sub(lcss)
}

#[derive(Debug, Clone, Copy)]
struct Offset {
    c1: usize,
    c2: usize,
    trans: bool,
}

/// Sift4 with transposition tracking.
#[must_use]
pub fn sift4_common_units<T: Unit>(a: &[T], b: &[T], max_offset: usize) -> usize {
    let (s1, s2) = canonical(a, b);
    let (l1, l2) = (s1.len(), s2.len());

    if l1 == 0 {
        return l2;
    }
    if l2 == 0 {
        return l1;
    }

    let mut c1 = 0usize;
    let mut c2 = 0usize;
    let mut lcss = 0usize;
    let mut local_cs = 0usize;
    let mut trans = 0usize;
    let mut offsets: SmallVec<[Offset; 16]> = SmallVec::new();

    while c1 < l1 && c2 < l2 {
        if s1[c1] == s2[c2] {
            local_cs += 1;

            // A match crossing an earlier one is a transposition
            let mut is_trans = false;
            let mut i = 0;
            while i < offsets.len() {
                let ofs = &mut offsets[i];
                if c1 <= ofs.c1 || c2 <= ofs.c2 {
                    is_trans = c1.abs_diff(c2) >= ofs.c1.abs_diff(ofs.c2);
                    if is_trans {
                        trans += 1;
                    } else if !ofs.trans {
                        ofs.trans = true;
                        trans += 1;
                    }
                    break;
                } else if c1 > ofs.c2 && c2 > ofs.c1 {
                    offsets.remove(i);
                } else {
                    i += 1;
                }
            }
            offsets.push(Offset {
                c1,
                c2,
                trans: is_trans,
            });

            c1 += 1;
            c2 += 1;
        } else {
            lcss += local_cs;
            local_cs = 0;
            if c1 != c2 {
                c1 = c1.min(c2);
                c2 = c1;
            }

            // A jump lands the cursors on a match, taken on the next pass
            let mut jumped = false;
            for i in 0..max_offset {
                if c1 + i >= l1 && c2 + i >= l2 {
                    break;
                }
                if c1 + i < l1 && s1[c1 + i] == s2[c2] {
                    c1 += i;
                    jumped = true;
                    break;
                }
                if c2 + i < l2 && s1[c1] == s2[c2 + i] {
                    c2 += i;
                    jumped = true;
                    break;
                }
            }
            if !jumped {
                c1 += 1;
                c2 += 1;
            }
        }

        if c1 >= l1 || c2 >= l2 {
            lcss += local_cs;
            local_cs = 0;
            c1 = c1.min(c2);
            c2 = c1;
        }
    }

    lcss += local_cs;
    (l1.max(l2) + trans).saturating_sub(lcss)
}

#[inline]
#[must_use]
pub fn sift4_simple(a: &str, b: &str) -> usize {
    sift4_simple_units(&chars(a), &chars(b), DEFAULT_MAX_OFFSET)
}

#[inline]
#[must_use]
pub fn sift4_common(a: &str, b: &str) -> usize {
    sift4_common_units(&chars(a), &chars(b), DEFAULT_MAX_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_identical() {
        for sift in [sift4_simple, sift4_common] {
            assert_eq!(sift("", ""), 0);
            assert_eq!(sift("", "abc"), 3);
            assert_eq!(sift("abcd", ""), 4);
            assert_eq!(sift("sift", "sift"), 0);
        }
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(sift4_simple("abc", "abd"), 1);
        assert_eq!(sift4_common("abc", "abd"), 1);
        assert_eq!(sift4_simple("ab", "ba"), 1);
        assert_eq!(sift4_common("ab", "ba"), 1);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("this is an example", "this is a sample"),
            ("abcdef", "badcfe"),
            ("kitten", "sitting"),
            ("aab", "bba"),
        ];
        for (a, b) in pairs {
            assert_eq!(sift4_simple(a, b), sift4_simple(b, a), "{} {}", a, b);
            assert_eq!(sift4_common(a, b), sift4_common(b, a), "{} {}", a, b);
        }
    }

    #[test]
    fn test_zero_offset_matches_in_place_only() {
        let (a, b) = (chars("xabc"), chars("abc"));
        assert_eq!(sift4_simple_units(&a, &b, 0), 4);
        assert!(sift4_simple_units(&a, &b, DEFAULT_MAX_OFFSET) < 4);
    }
}
