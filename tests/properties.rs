//! Property-based tests for the metric registry and comparison engine.
//!
//! These check the invariants every registered metric must hold for arbitrary
//! input, in both `char` and grapheme units.

use proptest::prelude::*;
use string_compare::{compare, list_metrics, Comparison, ComparisonUnit, Engine};

fn grapheme_engine() -> Engine {
    Engine::builder()
        .unit(ComparisonUnit::Grapheme)
        .build()
        .unwrap()
}

/// Short strings over a small alphabet, so pairs share units often.
fn arb_small() -> impl Strategy<Value = String> {
    "[abc]{0,12}"
}

/// Arbitrary Unicode, including combining marks and astral code points.
fn arb_unicode() -> impl Strategy<Value = String> {
    "\\PC{0,24}"
}

fn assert_pairing(result: &Comparison) {
    assert_eq!(result.unnormalized.len(), result.normalized.len());
    for (raw, norm) in result.unnormalized.iter().zip(&result.normalized) {
        assert_eq!(raw.name, norm.name);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 300,
        ..ProptestConfig::default()
    })]

    // ─────────────────────────────────────────────────────────────────────────
    // Identity and symmetry
    // ─────────────────────────────────────────────────────────────────────────

    /// Every metric reports zero for a string compared with itself.
    #[test]
    fn identity_is_zero(a in arb_unicode()) {
        for result in [compare(&a, &a), grapheme_engine().compare(&a, &a)] {
            prop_assert_eq!(result.len(), list_metrics().len());
            for (raw, norm) in result.unnormalized.iter().zip(&result.normalized) {
                prop_assert_eq!(raw.distance, 0.0, "{}", raw.name);
                prop_assert_eq!(norm.distance, 0.0, "{}", norm.name);
            }
        }
    }

    /// Swapping the operands gives bit-identical results.
    #[test]
    fn symmetric_small_alphabet(a in arb_small(), b in arb_small()) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn symmetric_unicode(a in arb_unicode(), b in arb_unicode()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a));
        let engine = grapheme_engine();
        prop_assert_eq!(engine.compare(&a, &b), engine.compare(&b, &a));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ranges
    // ─────────────────────────────────────────────────────────────────────────

    /// Raw distances are non-negative and normalized ones fall in [0, 1].
    #[test]
    fn distances_in_range(a in arb_unicode(), b in arb_unicode()) {
        let result = compare(&a, &b);
        assert_pairing(&result);
        for raw in &result.unnormalized {
            prop_assert!(raw.distance.is_finite() && raw.distance >= 0.0, "{}", raw.name);
        }
        for norm in &result.normalized {
            prop_assert!((0.0..=1.0).contains(&norm.distance), "{}: {}", norm.name, norm.distance);
        }
    }

    /// Edit distances are bounded by the longer operand and ordered
    /// Damerau <= OSA <= Levenshtein.
    #[test]
    fn edit_distance_ordering(a in arb_small(), b in arb_small()) {
        let result = compare(&a, &b);
        let lev = result.get("levenshtein").unwrap().0;
        let osa = result.get("optimal_string_alignment").unwrap().0;
        let dl = result.get("damerau_levenshtein").unwrap().0;
        let bag = result.get("bag").unwrap().0;
        let longer = a.chars().count().max(b.chars().count()) as f64;

        prop_assert!(dl <= osa);
        prop_assert!(osa <= lev);
        prop_assert!(lev <= longer);
        prop_assert!(bag <= lev);
    }

    /// Tversky with unit weights is Jaccard; Smith-Waterman never beats the
    /// length difference.
    #[test]
    fn token_and_alignment_relations(a in arb_small(), b in arb_small()) {
        let result = compare(&a, &b);
        prop_assert_eq!(result.get("tversky"), result.get("jaccard"));
        let (sw, _) = result.get("smith_waterman").unwrap();
        let (length, _) = result.get("length").unwrap();
        prop_assert!(sw >= length);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output shape
    // ─────────────────────────────────────────────────────────────────────────

    /// Hamming appears exactly when the unit counts agree.
    #[test]
    fn hamming_presence(a in arb_small(), b in arb_small()) {
        let result = compare(&a, &b);
        let same_length = a.chars().count() == b.chars().count();
        prop_assert_eq!(result.get("hamming").is_some(), same_length);
        let expected = if same_length { list_metrics().len() } else { list_metrics().len() - 1 };
        prop_assert_eq!(result.len(), expected);
    }

    /// Repeated calls and batch calls agree with each other.
    #[test]
    fn deterministic(pairs in prop::collection::vec((arb_unicode(), arb_unicode()), 0..8)) {
        let engine = Engine::default();
        let batch = engine.compare_batch(&pairs);
        prop_assert_eq!(batch.len(), pairs.len());
        for ((a, b), result) in pairs.iter().zip(&batch) {
            prop_assert_eq!(result, &engine.compare(a, b));
            prop_assert_eq!(result, &compare(a, b));
        }
    }
}

#[test]
fn empty_pair_is_all_zero() {
    let result = compare("", "");
    assert_eq!(result.len(), list_metrics().len());
    assert!(result.unnormalized.iter().all(|d| d.distance == 0.0));
    assert!(result.normalized.iter().all(|d| d.distance == 0.0));
}
