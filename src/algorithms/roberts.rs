//! Roberts similarity
//!
//! A frequency-weighted overlap of two unit multisets. Each unit present in
//! either input contributes `(ca + cb) * min(ca, cb) / max(ca, cb)` to the
//! numerator and `ca + cb` to the denominator, so shared units count more when
//! their frequencies agree.
//!
//! Terms are summed in unit order rather than hash order, which keeps the
//! floating-point result identical under swapped operands.

use super::token::UnitCounts;
use super::{chars, Unit};

/// Roberts distance, `1 - similarity`, in [0, 1].
///
/// Two empty inputs are identical; an empty input against a non-empty one
/// shares nothing.
#[must_use]
pub fn roberts_distance_units<T: Unit>(a: &[T], b: &[T]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => {
            let (ca, cb) = (UnitCounts::new(a), UnitCounts::new(b));
            let mut units: Vec<T> = ca.units().chain(cb.units()).collect();
            units.sort_unstable();
            units.dedup();

            let mut numerator = 0.0;
            for unit in &units {
                let (x, y) = (ca.count(unit), cb.count(unit));
                let shared = x.min(y);
                if shared > 0 {
                    numerator += (x + y) as f64 * shared as f64 / x.max(y) as f64;
                }
            }
            let denominator = (ca.total() + cb.total()) as f64;
            (1.0 - numerator / denominator).clamp(0.0, 1.0)
        }
    }
}

#[inline]
#[must_use]
pub fn roberts_distance(a: &str, b: &str) -> f64 {
    roberts_distance_units(&chars(a), &chars(b))
}
