//! Hamming distance implementation
//!
//! Counts positions where units differ. Only defined for inputs of equal
//! length; unequal lengths yield `None` here and are reported as
//! `CompareError::LengthMismatch` by the metric registry.
//!
//! # Complexity
//! - Time: O(n)
//! - Space: O(1) beyond the unit slices

use super::{chars, Unit};

/// Hamming distance between two unit slices.
/// Returns `None` if the slices have different lengths.
#[inline]
#[must_use]
pub fn hamming_units<T: Unit>(a: &[T], b: &[T]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }

    Some(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Hamming distance between two strings, in `char`s.
/// Returns `None` if the strings have different lengths.
///
/// # Example
/// ```
/// use string_compare::algorithms::hamming::hamming_distance;
///
/// assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
/// assert_eq!(hamming_distance("abcd", "ab"), None);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> Option<usize> {
    hamming_units(&chars(a), &chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_basic() {
        assert_eq!(hamming_distance("", ""), Some(0));
        assert_eq!(hamming_distance("abc", "abc"), Some(0));
        assert_eq!(hamming_distance("abc", "axc"), Some(1));
        assert_eq!(hamming_distance("karolin", "kathrin"), Some(3));
        assert_eq!(hamming_distance("1011101", "1001001"), Some(2));
    }

    #[test]
    fn test_hamming_different_lengths() {
        assert_eq!(hamming_distance("abc", "ab"), None);
        assert_eq!(hamming_distance("", "a"), None);
    }

    #[test]
    fn test_hamming_counts_chars_not_bytes() {
        // same char count, different byte lengths
        assert_eq!(hamming_distance("café", "cafe"), Some(1));
    }
}
