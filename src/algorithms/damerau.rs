//! Damerau-Levenshtein distances
//!
//! Extends Levenshtein with transposition of two adjacent units.
//!
//! Two variants are provided:
//! - **unrestricted** (`damerau_levenshtein_units`): a substring may be edited
//!   again after a transposition. This is a true metric.
//! - **optimal string alignment** (`osa_units`): no substring is edited more
//!   than once. Cheaper, but does not satisfy the triangle inequality.
//!
//! # Long inputs
//!
//! The unrestricted variant needs an O(m·n) matrix. Once that matrix would
//! exceed ten million cells it falls back to the O(n)-space OSA algorithm, which
//! can report a larger distance for inputs relying on edits inside a transposed
//! pair.

use super::{chars, Unit};
use ahash::AHashMap;
use smallvec::SmallVec;

/// Largest matrix, in cells, the unrestricted algorithm may allocate
/// (about 80 MB of `usize` on 64-bit targets).
const MAX_MATRIX_CELLS: usize = 10_000_000;

/// Whether the full (m+2)×(n+2) matrix stays within [`MAX_MATRIX_CELLS`].
#[inline]
fn fits_matrix_budget(m: usize, n: usize) -> bool {
    m.saturating_add(2).saturating_mul(n.saturating_add(2)) <= MAX_MATRIX_CELLS
}

/// Optimal string alignment distance (restricted Damerau-Levenshtein).
///
/// # Complexity
/// - Time: O(m·n)
/// - Space: O(n), three rolling rows
#[must_use]
pub fn osa_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Three rows for transposition detection
    let mut prev2_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];
    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr_row[j] = curr_row[j].min(prev2_row[j - 2] + 1);
            }
        }

        std::mem::swap(&mut prev2_row, &mut prev_row);
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Unrestricted Damerau-Levenshtein distance (Lowrance-Wagner algorithm).
///
/// Falls back to [`osa_units`] when the matrix would exceed ten million cells.
///
/// # Complexity
/// - Time: O(m·n)
/// - Space: O(m·n)
#[must_use]
pub fn damerau_levenshtein_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    if !fits_matrix_budget(m, n) {
        log::debug!(
            "damerau_levenshtein: {}x{} units exceeds {} matrix cells, using optimal string alignment",
            m,
            n,
            MAX_MATRIX_CELLS
        );
        return osa_units(a, b);
    }

    let max_dist = m + n;

    // Last row in which each unit of `a` was seen
    let mut last_row: AHashMap<T, usize> = AHashMap::new();

    // DP matrix with an extra sentinel row and column, flattened
    let width = n + 2;
    let mut d: Vec<usize> = vec![0; (m + 2) * width];
    let idx = |i: usize, j: usize| i * width + j;

    d[idx(0, 0)] = max_dist;
    for i in 0..=m {
        d[idx(i + 1, 0)] = max_dist;
        d[idx(i + 1, 1)] = i;
    }
    for j in 0..=n {
        d[idx(0, j + 1)] = max_dist;
        d[idx(1, j + 1)] = j;
    }

    for i in 1..=m {
        let mut last_match_col = 0usize;

        for j in 1..=n {
            let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let j1 = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            d[idx(i + 1, j + 1)] = (d[idx(i, j)] + cost) // substitution
                .min(d[idx(i + 1, j)] + 1) // insertion
                .min(d[idx(i, j + 1)] + 1) // deletion
                .min(d[idx(i1, j1)] + (i - i1 - 1) + 1 + (j - j1 - 1)); // transposition
        }

        last_row.insert(a[i - 1], i);
    }

    d[idx(m + 1, n + 1)]
}

/// Unrestricted Damerau-Levenshtein distance between two strings, in `char`s.
///
/// # Example
/// ```
/// use string_compare::algorithms::damerau::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ab", "ba"), 1);
/// assert_eq!(damerau_levenshtein("ca", "abc"), 2);
/// ```
#[inline]
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    damerau_levenshtein_units(&chars(a), &chars(b))
}

/// Optimal string alignment distance between two strings, in `char`s.
///
/// Differs from [`damerau_levenshtein`] for inputs such as "CA" -> "ABC":
/// OSA = 3 (sub C->A, sub A->B, ins C), unrestricted = 2 (transpose, insert B).
#[inline]
#[must_use]
pub fn optimal_string_alignment(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    osa_units(&chars(a), &chars(b))
}
