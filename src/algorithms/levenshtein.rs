//! Levenshtein (edit) distance implementation
//!
//! Unit cost for insertion, deletion and substitution.
//!
//! Optimized with:
//! - Myers bit-parallel algorithm for patterns up to 64 units
//! - Single-row DP fallback for longer patterns
//! - Common prefix/suffix trimming before either path runs

use super::{chars, common_prefix, common_suffix, Unit};
use ahash::AHashMap;
use smallvec::SmallVec;

/// Maximum pattern length for Myers bit-parallel algorithm (64 bits per block)
const MYERS_BLOCK_SIZE: usize = 64;

// ============================================================================
// Myers Bit-Parallel Algorithm
// ============================================================================

/// Myers bit-parallel Levenshtein distance for patterns up to 64 units.
///
/// Runs in O(n) word operations when the whole pattern fits a single `u64`.
///
/// Based on: Myers, G. (1999). "A fast bit-vector algorithm for approximate string matching"
#[inline]
fn myers_64<T: Unit>(pattern: &[T], text: &[T]) -> usize {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }
    if m > MYERS_BLOCK_SIZE {
        return dp_distance(pattern, text);
    }

    // Peq[c] has bit i set if pattern[i] == c
    let mut peq: AHashMap<T, u64> = AHashMap::with_capacity(m.min(32));
    for (i, &c) in pattern.iter().enumerate() {
        *peq.entry(c).or_insert(0) |= 1u64 << i;
    }

    let mut vp: u64 = !0u64;
    let mut vn: u64 = 0u64;
    let mut score = m;

    let mask = 1u64 << (m - 1);

    for tc in text {
        let eq = peq.get(tc).copied().unwrap_or(0);

        let xv = eq | vn;
        let xh = (((eq & vp).wrapping_add(vp)) ^ vp) | eq;

        let hp = vn | !(xh | vp);
        let hn = vp & xh;

        if (hp & mask) != 0 {
            score += 1;
        } else if (hn & mask) != 0 {
            score -= 1;
        }

        // first row is 0,1,2,... so bit 0 of the shifted hp is always set
        let hp_shifted = (hp << 1) | 1;
        let hn_shifted = hn << 1;

        vp = hn_shifted | !(xv | hp_shifted);
        vn = hp_shifted & xv;
    }

    score
}

/// Standard single-row DP distance (fallback for long patterns)
#[inline]
fn dp_distance<T: Unit>(a: &[T], b: &[T]) -> usize {
    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Shorter slice on the column axis
    let (target, source) = if m < n { (a, b) } else { (b, a) };
    let n_target = target.len();

    let mut row: SmallVec<[usize; 64]> = (0..=n_target).collect();

    for (i, sc) in source.iter().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, tc) in target.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let deletion = row[j + 1] + 1;
            let insertion = row[j] + 1;
            let substitution = prev + cost;

            prev = row[j + 1];
            row[j + 1] = substitution.min(deletion).min(insertion);
        }
    }

    row[n_target]
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance between two unit slices.
///
/// # Complexity
/// - Time: O(⌈m/64⌉·n) via Myers, O(m·n) for patterns over 64 units
/// - Space: O(min(m, n))
#[must_use]
pub fn levenshtein_units<T: Unit>(a: &[T], b: &[T]) -> usize {
    let prefix = common_prefix(a, b);
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = common_suffix(a, b);
    let (a, b) = (&a[..a.len() - suffix], &b[..b.len() - suffix]);

    // Shorter slice as the pattern keeps Myers in a single word more often
    let (pattern, text) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if pattern.len() <= MYERS_BLOCK_SIZE {
        myers_64(pattern, text)
    } else {
        dp_distance(pattern, text)
    }
}

/// Levenshtein distance between two strings, counted in `char`s.
///
/// # Example
/// ```
/// use string_compare::algorithms::levenshtein::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    levenshtein_units(&chars(a), &chars(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graphemes;

    #[test]
    fn test_empty_and_identical() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("", "four"), 4);
        assert_eq!(levenshtein("four", ""), 4);
    }

    #[test]
    fn test_known_distances() {
        let cases = [
            ("kitten", "sitting", 3),
            ("flaw", "lawn", 2),
            ("book", "back", 2),
            ("sunday", "saturday", 3),
            ("ab", "ba", 2),
            ("x", "y", 1),
        ];
        for (a, b, expected) in cases {
            assert_eq!(levenshtein(a, b), expected, "{} vs {}", a, b);
            assert_eq!(levenshtein(b, a), expected, "{} vs {}", b, a);
        }
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // é and ü are two bytes each in UTF-8
        assert_eq!(levenshtein("r\u{e9}sum\u{e9}", "resume"), 2);
        assert_eq!(levenshtein("\u{fc}ber", "uber"), 1);
        assert_eq!(levenshtein("\u{6771}\u{4eac}", "\u{4eac}\u{90fd}"), 2);
    }

    #[test]
    fn test_myers_matches_dp() {
        let pairs = [
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("gumbo", "gambol"),
            ("abcdefghij", "jihgfedcba"),
            ("mississippi", "missouri"),
        ];
        for (a, b) in pairs {
            let (a, b) = (chars(a), chars(b));
            assert_eq!(myers_64(&a, &b), dp_distance(&a, &b), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_long_pattern_uses_dp() {
        let a = "ab".repeat(50);
        let b = "ba".repeat(50);
        let (ca, cb) = (chars(&a), chars(&b));
        // first and last unit differ, so trimming leaves a 100-unit pattern
        assert_eq!(levenshtein(&a, &b), dp_distance(&ca, &cb));
        assert_eq!(levenshtein(&a, &b), 2);
    }

    #[test]
    fn test_levenshtein_graphemes() {
        // 👨‍👩‍👧‍👦 is 7 code points but 1 grapheme cluster
        let family = graphemes("👨‍👩‍👧‍👦");
        let man = graphemes("👨");
        assert_eq!(levenshtein_units(&family, &man), 1);
        assert_eq!(levenshtein("👨‍👩‍👧‍👦", "👨"), 6);
    }
}
