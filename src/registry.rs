//! Metric registry
//!
//! The fixed, ordered table of supported distance metrics. Each entry knows
//! how to compute its raw distance and the largest raw distance possible for
//! operands of given lengths, which is what normalization divides by.
//!
//! The table is built at compile time and never changes, so any number of
//! threads may read it without synchronization.
//!
//! | metric | raw distance | max possible | normalized |
//! |---|---|---|---|
//! | `levenshtein` | edit distance | `max(la, lb)` | `raw / max` |
//! | `damerau_levenshtein` | edit distance with transpositions | `max(la, lb)` | `raw / max` |
//! | `optimal_string_alignment` | restricted Damerau-Levenshtein | `max(la, lb)` | `raw / max` |
//! | `hamming` | differing positions, equal lengths only | `la` | `raw / max` |
//! | `jaro`, `jaro_winkler` | `1 - similarity` | `1` | unchanged |
//! | `sift4_simple`, `sift4_common` | approximate edit distance | `max(la, lb)` | `raw / max`, clamped |
//! | `smith_waterman` | `max(la, lb) - local alignment score` | `max(la, lb)` | `raw / max` |
//! | `lcs_seq`, `lcs_str` | `max(la, lb) - common length` | `max(la, lb)` | `raw / max` |
//! | `ratcliff_obershelp` | `1 - 2M / (la + lb)` | `1` | unchanged |
//! | `jaccard`, `sorensen_dice`, `overlap`, `cosine` | `1 - similarity` | `1` | unchanged |
//! | `tversky`, `roberts` | `1 - similarity` | `1` | unchanged |
//! | `bag`, `prefix`, `suffix`, `length` | unit counts | `max(la, lb)` | `raw / max` |

use crate::algorithms::jaro::JaroWinklerConfig;
use crate::algorithms::{self, chars, Unit};
use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of registered metrics
pub const METRIC_COUNT: usize = 22;

/// A registered distance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    // Edit-based
    Levenshtein,
    DamerauLevenshtein,
    OptimalStringAlignment,
    Hamming,
    Jaro,
    JaroWinkler,
    Sift4Simple,
    Sift4Common,
    SmithWaterman,

    // Sequence-based
    LcsSeq,
    LcsStr,
    RatcliffObershelp,

    // Token-based
    Jaccard,
    SorensenDice,
    Overlap,
    Cosine,
    Tversky,
    Roberts,
    Bag,

    // Naive
    Prefix,
    Suffix,
    Length,
}

/// Algorithm family a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Integer edit counts (Levenshtein and relatives)
    Edit,
    /// `1 - similarity` for a similarity already in [0, 1]
    SimilarityDerived,
    /// Derived from longest common subsequence/substring lengths
    Sequence,
    /// Order-insensitive multiset comparisons
    Token,
    /// Prefix, suffix and length comparisons
    Naive,
}

/// Largest raw distance a metric can report for given operand lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaxDistance {
    Bounded(f64),
    /// No finite maximum; normalization passes the raw value through.
    Unbounded,
}

impl Metric {
    /// All metrics, in registry order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Levenshtein,
        Metric::DamerauLevenshtein,
        Metric::OptimalStringAlignment,
        Metric::Hamming,
        Metric::Jaro,
        Metric::JaroWinkler,
        Metric::Sift4Simple,
        Metric::Sift4Common,
        Metric::SmithWaterman,
        Metric::LcsSeq,
        Metric::LcsStr,
        Metric::RatcliffObershelp,
        Metric::Jaccard,
        Metric::SorensenDice,
        Metric::Overlap,
        Metric::Cosine,
        Metric::Tversky,
        Metric::Roberts,
        Metric::Bag,
        Metric::Prefix,
        Metric::Suffix,
        Metric::Length,
    ];

    /// Stable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::DamerauLevenshtein => "damerau_levenshtein",
            Metric::OptimalStringAlignment => "optimal_string_alignment",
            Metric::Hamming => "hamming",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler => "jaro_winkler",
            Metric::Sift4Simple => "sift4_simple",
            Metric::Sift4Common => "sift4_common",
            Metric::SmithWaterman => "smith_waterman",
            Metric::LcsSeq => "lcs_seq",
            Metric::LcsStr => "lcs_str",
            Metric::RatcliffObershelp => "ratcliff_obershelp",
            Metric::Jaccard => "jaccard",
            Metric::SorensenDice => "sorensen_dice",
            Metric::Overlap => "overlap",
            Metric::Cosine => "cosine",
            Metric::Tversky => "tversky",
            Metric::Roberts => "roberts",
            Metric::Bag => "bag",
            Metric::Prefix => "prefix",
            Metric::Suffix => "suffix",
            Metric::Length => "length",
        }
    }

    #[must_use]
    pub const fn family(self) -> Family {
        match self {
            Metric::Levenshtein
            | Metric::DamerauLevenshtein
            | Metric::OptimalStringAlignment
            | Metric::Hamming
            | Metric::Sift4Simple
            | Metric::Sift4Common
            | Metric::SmithWaterman => Family::Edit,
            Metric::Jaro | Metric::JaroWinkler => Family::SimilarityDerived,
            Metric::LcsSeq | Metric::LcsStr | Metric::RatcliffObershelp => Family::Sequence,
            Metric::Jaccard
            | Metric::SorensenDice
            | Metric::Overlap
            | Metric::Cosine
            | Metric::Tversky
            | Metric::Roberts
            | Metric::Bag => Family::Token,
            Metric::Prefix | Metric::Suffix | Metric::Length => Family::Naive,
        }
    }

    /// Whether `d(a, b) == d(b, a)` holds for every input.
    ///
    /// Every registered metric is symmetric. Jaro, Jaro-Winkler, Sift4 and
    /// Ratcliff-Obershelp get there by scanning their operands in a canonical
    /// order; Tversky by using equal weights.
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        true
    }

    /// Whether the metric is only defined for operands of equal length.
    #[must_use]
    pub const fn requires_equal_length(self) -> bool {
        matches!(self, Metric::Hamming)
    }

    /// Largest raw distance possible for operands of `len_a` and `len_b` units.
    #[must_use]
    pub fn max_possible(self, len_a: usize, len_b: usize) -> MaxDistance {
        match self {
            Metric::Jaro
            | Metric::JaroWinkler
            | Metric::Jaccard
            | Metric::RatcliffObershelp
            | Metric::SorensenDice
            | Metric::Overlap
            | Metric::Cosine
            | Metric::Tversky
            | Metric::Roberts => MaxDistance::Bounded(1.0),
            // Sift4 common can overshoot by its transposition count; normalization clamps
            Metric::Levenshtein
            | Metric::DamerauLevenshtein
            | Metric::OptimalStringAlignment
            | Metric::Hamming
            | Metric::Sift4Simple
            | Metric::Sift4Common
            | Metric::SmithWaterman
            | Metric::LcsSeq
            | Metric::LcsStr
            | Metric::Bag
            | Metric::Prefix
            | Metric::Suffix
            | Metric::Length => MaxDistance::Bounded(len_a.max(len_b) as f64),
        }
    }

    /// Raw distance between two unit slices.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::LengthMismatch`] for Hamming on unequal lengths.
    pub fn raw_units<T: Unit>(self, a: &[T], b: &[T], jaro_winkler: &JaroWinklerConfig) -> Result<f64> {
        let raw = match self {
            Metric::Levenshtein => algorithms::levenshtein_units(a, b) as f64,
            Metric::DamerauLevenshtein => algorithms::damerau_levenshtein_units(a, b) as f64,
            Metric::OptimalStringAlignment => algorithms::osa_units(a, b) as f64,
            Metric::Hamming => algorithms::hamming_units(a, b).ok_or(CompareError::LengthMismatch {
                metric: self.name(),
                len_a: a.len(),
                len_b: b.len(),
            })? as f64,
            Metric::Jaro => 1.0 - algorithms::jaro_similarity_units(a, b),
            Metric::JaroWinkler => {
                1.0 - algorithms::jaro_winkler_similarity_units(
                    a,
                    b,
                    jaro_winkler.prefix_weight,
                    jaro_winkler.max_prefix_length,
                )
            }
            Metric::Sift4Simple => {
                algorithms::sift4_simple_units(a, b, algorithms::DEFAULT_MAX_OFFSET) as f64
            }
            Metric::Sift4Common => {
                algorithms::sift4_common_units(a, b, algorithms::DEFAULT_MAX_OFFSET) as f64
            }
            Metric::SmithWaterman => algorithms::smith_waterman_distance_units(a, b) as f64,
            Metric::LcsSeq => algorithms::lcs_seq_distance_units(a, b) as f64,
            Metric::LcsStr => algorithms::lcs_str_distance_units(a, b) as f64,
            Metric::RatcliffObershelp => algorithms::ratcliff_obershelp_distance_units(a, b),
            Metric::Jaccard => algorithms::jaccard_distance_units(a, b),
            Metric::SorensenDice => algorithms::sorensen_dice_distance_units(a, b),
            Metric::Overlap => algorithms::overlap_distance_units(a, b),
            Metric::Cosine => algorithms::cosine_distance_units(a, b),
            Metric::Tversky => algorithms::tversky_distance_units(
                a,
                b,
                algorithms::DEFAULT_TVERSKY_WEIGHT,
                algorithms::DEFAULT_TVERSKY_WEIGHT,
            ),
            Metric::Roberts => algorithms::roberts_distance_units(a, b),
            Metric::Bag => algorithms::bag_distance_units(a, b) as f64,
            Metric::Prefix => algorithms::prefix_distance_units(a, b) as f64,
            Metric::Suffix => algorithms::suffix_distance_units(a, b) as f64,
            Metric::Length => algorithms::length_distance_units(a, b) as f64,
        };

        Ok(raw.max(0.0))
    }

    /// Raw and normalized distance from a single computation.
    ///
    /// # Errors
    ///
    /// Same as [`Metric::raw_units`].
    pub fn evaluate<T: Unit>(
        self,
        a: &[T],
        b: &[T],
        jaro_winkler: &JaroWinklerConfig,
    ) -> Result<(f64, f64)> {
        let raw = self.raw_units(a, b, jaro_winkler)?;
        Ok((raw, normalize(self, raw, a.len(), b.len())))
    }

    /// The registry entry for this metric.
    #[must_use]
    pub const fn descriptor(self) -> MetricDescriptor {
        MetricDescriptor {
            metric: self,
            name: self.name(),
            family: self.family(),
            symmetric: self.is_symmetric(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = CompareError;

    /// Parses a registered name or one of the aliases `damerau`, `osa`, `lcs`,
    /// `dice`, `sift4` and `gestalt`. Matching ignores ASCII case and treats `-` as `_`.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let alias = match key.as_str() {
            "damerau" => Some(Metric::DamerauLevenshtein),
            "osa" => Some(Metric::OptimalStringAlignment),
            "lcs" => Some(Metric::LcsSeq),
            "dice" => Some(Metric::SorensenDice),
            "sift4" => Some(Metric::Sift4Common),
            "gestalt" => Some(Metric::RatcliffObershelp),
            _ => None,
        };
        alias
            .or_else(|| Metric::ALL.into_iter().find(|m| m.name() == key))
            .ok_or_else(|| CompareError::UnknownMetric(s.to_string()))
    }
}

/// Immutable registry entry: a metric, its stable name and its properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDescriptor {
    pub metric: Metric,
    pub name: &'static str,
    pub family: Family,
    pub symmetric: bool,
}

impl MetricDescriptor {
    /// Raw distance between two strings, counted in `char`s.
    ///
    /// # Errors
    ///
    /// Same as [`Metric::raw_units`].
    pub fn raw(&self, a: &str, b: &str) -> Result<f64> {
        self.metric
            .raw_units(&chars(a), &chars(b), &JaroWinklerConfig::default())
    }

    #[must_use]
    pub fn max_possible(&self, len_a: usize, len_b: usize) -> MaxDistance {
        self.metric.max_possible(len_a, len_b)
    }
}

const fn build_registry() -> [MetricDescriptor; METRIC_COUNT] {
    let mut out = [Metric::Levenshtein.descriptor(); METRIC_COUNT];
    let mut i = 0;
    while i < METRIC_COUNT {
        out[i] = Metric::ALL[i].descriptor();
        i += 1;
    }
    out
}

const fn build_names() -> [&'static str; METRIC_COUNT] {
    let mut out = [""; METRIC_COUNT];
    let mut i = 0;
    while i < METRIC_COUNT {
        out[i] = Metric::ALL[i].name();
        i += 1;
    }
    out
}

static REGISTRY: [MetricDescriptor; METRIC_COUNT] = build_registry();

static NAMES: [&str; METRIC_COUNT] = build_names();

/// All registry entries, in registry order.
#[must_use]
pub fn registry() -> &'static [MetricDescriptor] {
    &REGISTRY
}

/// Names of all registered metrics, in registry order.
#[must_use]
pub fn list_metrics() -> &'static [&'static str] {
    &NAMES
}

/// Look up a registry entry by name or alias.
///
/// # Errors
///
/// Returns [`CompareError::UnknownMetric`] if nothing matches.
pub fn lookup(name: &str) -> Result<&'static MetricDescriptor> {
    let metric: Metric = name.parse()?;
    REGISTRY
        .iter()
        .find(|d| d.metric == metric)
        .ok_or_else(|| CompareError::UnknownMetric(name.to_string()))
}

/// Raw distance of the named metric between two strings, counted in `char`s.
///
/// # Errors
///
/// - [`CompareError::UnknownMetric`] if `metric` is not registered
/// - [`CompareError::LengthMismatch`] for Hamming on unequal lengths
///
/// # Example
/// ```
/// use string_compare::{compute_raw, CompareError};
///
/// assert_eq!(compute_raw("levenshtein", "kitten", "sitting"), Ok(3.0));
/// assert!(matches!(
///     compute_raw("hamming", "abcd", "ab"),
///     Err(CompareError::LengthMismatch { .. })
/// ));
/// ```
pub fn compute_raw(metric: &str, a: &str, b: &str) -> Result<f64> {
    lookup(metric)?.raw(a, b)
}

/// Scale a raw distance by the metric's maximum for the operand lengths.
///
/// - `Bounded(max)`: `raw / max`, clamped into [0, 1]. A zero maximum (both
///   operands empty) yields 0.0 rather than NaN.
/// - `Unbounded`: the raw value is returned unchanged.
///
/// Metrics bounded by 1.0 are therefore unchanged by normalization.
#[must_use]
pub fn normalize(metric: Metric, raw: f64, len_a: usize, len_b: usize) -> f64 {
    scale(raw, metric.max_possible(len_a, len_b))
}

fn scale(raw: f64, max: MaxDistance) -> f64 {
    match max {
        MaxDistance::Bounded(max) if max > 0.0 => (raw / max).clamp(0.0, 1.0),
        MaxDistance::Bounded(_) => 0.0,
        MaxDistance::Unbounded => raw,
    }
}
