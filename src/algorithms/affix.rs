//! Naive metrics: common prefix, common suffix and length difference.

use super::{common_prefix, common_suffix, Unit};

/// `max(len_a, len_b) - common prefix length`
#[inline]
#[must_use]
pub fn prefix_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len().max(b.len()) - common_prefix(a, b)
}

/// `max(len_a, len_b) - common suffix length`
#[inline]
#[must_use]
pub fn suffix_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len().max(b.len()) - common_suffix(a, b)
}

/// `|len_a - len_b|`
#[inline]
#[must_use]
pub fn length_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.len().abs_diff(b.len())
}
