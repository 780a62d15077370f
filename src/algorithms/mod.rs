//! Core string distance algorithms
//!
//! Every algorithm is written once over a slice of comparison units, so the
//! same code serves Unicode scalar values (`char`) and grapheme clusters
//! (`&str`). Each module also offers `&str` convenience functions that split
//! the input into `char`s.

pub mod affix;
pub mod damerau;
pub mod hamming;
pub mod jaro;
pub mod lcs;
pub mod levenshtein;
pub mod normalize;
pub mod ratcliff;
pub mod roberts;
pub mod sift4;
pub mod smith_waterman;
pub mod token;
pub mod tversky;

pub use affix::*;
pub use damerau::*;
pub use hamming::*;
pub use jaro::*;
pub use lcs::*;
pub use levenshtein::*;
pub use ratcliff::*;
pub use roberts::*;
pub use sift4::*;
pub use smith_waterman::*;
pub use token::*;
pub use tversky::*;

use smallvec::SmallVec;
use std::cmp::Ordering;
use std::hash::Hash;
use unicode_segmentation::UnicodeSegmentation;

/// Element type the algorithms compare.
///
/// Blanket-implemented for anything cheap to copy, ordered and hashable; in
/// practice `char` and `&str` grapheme clusters.
pub trait Unit: Copy + Ord + Hash {}

impl<T: Copy + Ord + Hash> Unit for T {}

/// Inline buffer of units; most inputs fit without a heap allocation.
pub type Units<T> = SmallVec<[T; 64]>;

/// Split a string into Unicode scalar values.
#[inline]
#[must_use]
pub fn chars(s: &str) -> Units<char> {
    s.chars().collect()
}

/// Split a string into extended grapheme clusters.
#[inline]
#[must_use]
pub fn graphemes(s: &str) -> Units<&str> {
    s.graphemes(true).collect()
}

/// Length of the common prefix of two unit slices.
#[inline]
pub(crate) fn common_prefix<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix of two unit slices.
#[inline]
pub(crate) fn common_suffix<T: Unit>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Order two slices canonically: shorter first, ties broken by content.
///
/// Greedy algorithms whose result depends on which operand drives the scan
/// run on this order, so swapping the operands cannot change their output.
#[inline]
pub(crate) fn canonical<'s, T: Unit>(a: &'s [T], b: &'s [T]) -> (&'s [T], &'s [T]) {
    match a.len().cmp(&b.len()).then_with(|| a.cmp(b)) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}
