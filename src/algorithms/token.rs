//! Multiset (bag-of-units) metrics
//!
//! Each input is reduced to a multiset of its units, ignoring order. Jaccard,
//! Sørensen-Dice, overlap and cosine are similarities in [0.0, 1.0] and are
//! exposed as `1.0 - similarity`; bag distance is an integer count.
//!
//! Degenerate inputs: two empty inputs are identical (distance 0.0), and an
//! empty input against a non-empty one shares nothing (distance 1.0).
//!
//! # Complexity
//! - Time: O(m+n) for building frequency maps and comparing them
//! - Space: O(unique units)

use super::{chars, Unit};
use ahash::AHashMap;

/// Frequency map of units.
///
/// All counts stay integral so results do not depend on hash iteration order.
#[derive(Debug, Clone)]
pub struct UnitCounts<T: Unit> {
    counts: AHashMap<T, usize>,
    total: usize,
}

impl<T: Unit> UnitCounts<T> {
    #[must_use]
    pub fn new(units: &[T]) -> Self {
        let mut counts = AHashMap::with_capacity(units.len().min(64));
        for &u in units {
            *counts.entry(u).or_insert(0) += 1;
        }
        Self {
            counts,
            total: units.len(),
        }
    }

    /// Number of units, duplicates included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Occurrences of `unit`.
    #[must_use]
    pub fn count(&self, unit: &T) -> usize {
        self.counts.get(unit).copied().unwrap_or(0)
    }

    /// Distinct units, in hash order.
    pub fn units(&self) -> impl Iterator<Item = T> + '_ {
        self.counts.keys().copied()
    }

    /// Size of the multiset intersection: sum of per-unit minimum counts.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .filter_map(|(u, &c)| large.counts.get(u).map(|&o| c.min(o)))
            .sum()
    }

    /// Dot product of the two frequency vectors.
    #[must_use]
    pub fn dot(&self, other: &Self) -> u64 {
        self.counts
            .iter()
            .filter_map(|(u, &c)| other.counts.get(u).map(|&o| c as u64 * o as u64))
            .sum()
    }

    /// Squared Euclidean norm of the frequency vector.
    #[must_use]
    pub fn norm_squared(&self) -> u64 {
        self.counts.values().map(|&c| c as u64 * c as u64).sum()
    }
}

/// `1 - numerator / denominator`, with an empty denominator meaning "identical".
#[inline]
fn one_minus_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        1.0 - numerator as f64 / denominator as f64
    }
}

/// Jaccard distance: `1 - |A ∩ B| / |A ∪ B|`.
#[must_use]
pub fn jaccard_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
    let inter = ca.intersection(&cb);
    let union = ca.total() + cb.total() - inter;
    one_minus_ratio(inter, union)
}

/// Sørensen-Dice distance: `1 - 2|A ∩ B| / (|A| + |B|)`.
#[must_use]
pub fn sorensen_dice_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
    let inter = ca.intersection(&cb);
    one_minus_ratio(2 * inter, ca.total() + cb.total())
}

/// Overlap (Szymkiewicz-Simpson) distance: `1 - |A ∩ B| / min(|A|, |B|)`.
#[must_use]
pub fn overlap_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => {
            let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
            one_minus_ratio(ca.intersection(&cb), a.len().min(b.len()))
        }
    }
}

/// Cosine distance between unit frequency vectors: `1 - A·B / (|A| |B|)`.
#[must_use]
pub fn cosine_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => {
            let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
            let magnitude = (ca.norm_squared() as f64 * cb.norm_squared() as f64).sqrt();
            let similarity = ca.dot(&cb) as f64 / magnitude;
            (1.0 - similarity).clamp(0.0, 1.0)
        }
    }
}

/// Bag distance: `max(|A ∖ B|, |B ∖ A|)`, a lower bound on Levenshtein.
#[must_use]
pub fn bag_distance_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
    let inter = ca.intersection(&cb);
    (ca.total() - inter).max(cb.total() - inter)
}

/// Jaccard distance over `char` multisets.
#[must_use]
pub fn jaccard_distance(a: &str, b: &str) -> f64 {
    jaccard_distance_units(&chars(a), &chars(b))
}

/// Cosine distance over `char` frequency vectors.
#[must_use]
pub fn cosine_distance(a: &str, b: &str) -> f64 {
    cosine_distance_units(&chars(a), &chars(b))
}

/// Bag distance over `char` multisets.
#[must_use]
pub fn bag_distance(a: &str, b: &str) -> usize {
    bag_distance_units(&chars(a), &chars(b))
}
