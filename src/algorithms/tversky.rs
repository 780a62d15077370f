//! Tversky index
//!
//! An asymmetric generalization of Jaccard over unit multisets:
//!
//! `S = |A ∩ B| / (|A ∩ B| + α|A ∖ B| + β|B ∖ A|)`
//!
//! With `α = β = 1` it is Jaccard; with `α = β = 0.5` it is Sørensen-Dice.
//! Only `α == β` gives a symmetric distance. The registry uses 1.0 for both.

use super::token::UnitCounts;
use super::{chars, Unit};

/// Weight on both set differences used by the registered metric
pub const DEFAULT_TVERSKY_WEIGHT: f64 = 1.0;

/// Tversky distance, `1 - S`, in [0, 1] for non-negative weights.
///
/// Two empty inputs are identical. Inputs with nothing in common are at
/// distance 1.0 whatever the weights.
#[must_use]
pub fn tversky_distance_units<T: Unit>(a: &[T], b: &[T], alpha: f64, beta: f64) -> f64 {
    let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
    let inter = ca.intersection(&cb);
    if inter == 0 {
        return if a.is_empty() && b.is_empty() { 0.0 } else { 1.0 };
    }

    let only_a = (ca.total() - inter) as f64;
    let only_b = (cb.total() - inter) as f64;
    // Differences summed first so that swapping operands with equal weights is exact
    let denominator = inter as f64 + (alpha * only_a + beta * only_b);
    (1.0 - inter as f64 / denominator).clamp(0.0, 1.0)
}

#[inline]
#[must_use]
pub fn tversky_distance(a: &str, b: &str) -> f64 {
    tversky_distance_units(&chars(a), &chars(b), DEFAULT_TVERSKY_WEIGHT, DEFAULT_TVERSKY_WEIGHT)
}
