//! Comparison engine
//!
//! An [`Engine`] holds a validated metric selection and preprocessing
//! settings. It is immutable after construction and `Send + Sync`, so one
//! engine can serve any number of threads.

use crate::algorithms::jaro::{JaroWinklerConfig, MAX_PREFIX_WEIGHT};
use crate::algorithms::normalize::{normalize_pair, NormalizationMode};
use crate::algorithms::{chars, graphemes, Unit};
use crate::config::{CompareConfig, ComparisonUnit};
use crate::error::Result;
use crate::registry::Metric;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::OnceLock;

/// Minimum batch size before [`Engine::compare_batch`] switches to parallel
/// processing. Below this the rayon scheduling overhead outweighs the gain
/// for pairs of short strings.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A metric name paired with a distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedDistance {
    pub name: &'static str,
    pub distance: f64,
}

/// Result of comparing two strings.
///
/// Both sequences list the same metrics in the same order (registry order,
/// restricted to the engine's selection). A metric that is undefined for the
/// inputs, such as Hamming on strings of different length, is absent from
/// both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comparison {
    pub unnormalized: Vec<NamedDistance>,
    pub normalized: Vec<NamedDistance>,
}

impl Comparison {
    /// Split into `(unnormalized, normalized)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<NamedDistance>, Vec<NamedDistance>) {
        (self.unnormalized, self.normalized)
    }

    /// Raw and normalized distance for `name`, if that metric was computed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<(f64, f64)> {
        let index = self.unnormalized.iter().position(|d| d.name == name)?;
        Some((
            self.unnormalized[index].distance,
            self.normalized[index].distance,
        ))
    }

    /// Names of the computed metrics, in output order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.unnormalized.iter().map(|d| d.name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.unnormalized.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unnormalized.is_empty()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            unnormalized: Vec::with_capacity(capacity),
            normalized: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, name: &'static str, raw: f64, normalized: f64) {
        self.unnormalized.push(NamedDistance {
            name,
            distance: raw,
        });
        self.normalized.push(NamedDistance {
            name,
            distance: normalized,
        });
    }
}

/// Computes every selected metric for a pair of strings.
///
/// # Example
///
/// ```rust
/// use string_compare::Engine;
///
/// let engine = Engine::builder()
///     .metrics(["levenshtein", "damerau"])
///     .build()
///     .unwrap();
///
/// let result = engine.compare("ab", "ba");
/// assert_eq!(result.get("levenshtein"), Some((2.0, 1.0)));
/// assert_eq!(result.get("damerau_levenshtein"), Some((1.0, 0.5)));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    metrics: Vec<Metric>,
    unit: ComparisonUnit,
    normalization: Option<NormalizationMode>,
    jaro_winkler: JaroWinklerConfig,
}

impl Default for Engine {
    /// Every registered metric, `char` units, no normalization.
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
            unit: ComparisonUnit::default(),
            normalization: None,
            jaro_winkler: JaroWinklerConfig::default(),
        }
    }
}

impl Engine {
    /// Build an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first problem found in `config`: an unknown, duplicate or
    /// empty metric selection, an out-of-range Jaro-Winkler prefix weight, or a
    /// prefix cap long enough for Jaro-Winkler to call distinct strings identical.
    pub fn new(config: CompareConfig) -> Result<Self> {
        config.validate()?;
        let metrics = config.resolve_metrics()?;

        log::debug!(
            "comparison engine ready: {} metrics, unit {:?}, normalization {:?}",
            metrics.len(),
            config.unit,
            config.normalization
        );

        Ok(Self {
            metrics,
            unit: config.unit,
            normalization: config.normalization,
            jaro_winkler: config.jaro_winkler,
        })
    }

    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Selected metrics, in output order.
    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    #[must_use]
    pub fn unit(&self) -> ComparisonUnit {
        self.unit
    }

    /// Compare two strings with every selected metric.
    ///
    /// Never fails: metrics undefined for the inputs are left out of the result.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Comparison {
        let (a, b) = normalize_pair(a, b, self.normalization);
        match self.unit {
            ComparisonUnit::Char => self.compare_units(&chars(&a), &chars(&b)),
            ComparisonUnit::Grapheme => self.compare_units(&graphemes(&a), &graphemes(&b)),
        }
    }

    /// The result of comparing the empty string with itself: every selected
    /// metric at zero.
    #[must_use]
    pub fn baseline(&self) -> Comparison {
        let mut out = Comparison::with_capacity(self.metrics.len());
        for metric in &self.metrics {
            out.push(metric.name(), 0.0, 0.0);
        }
        out
    }

    /// Compare many pairs. Results come back in input order.
    ///
    /// Batches of [`PARALLEL_THRESHOLD`] pairs or more are spread over the
    /// rayon thread pool.
    pub fn compare_batch<A, B>(&self, pairs: &[(A, B)]) -> Vec<Comparison>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        if pairs.len() >= PARALLEL_THRESHOLD {
            pairs
                .par_iter()
                .map(|(a, b)| self.compare(a.as_ref(), b.as_ref()))
                .collect()
        } else {
            pairs
                .iter()
                .map(|(a, b)| self.compare(a.as_ref(), b.as_ref()))
                .collect()
        }
    }

    fn compare_units<T: Unit>(&self, a: &[T], b: &[T]) -> Comparison {
        let mut out = Comparison::with_capacity(self.metrics.len());
        for &metric in &self.metrics {
            match metric.evaluate(a, b, &self.jaro_winkler) {
                Ok((raw, normalized)) => out.push(metric.name(), raw, normalized),
                Err(err) => log::trace!("{} left out of comparison: {}", metric, err),
            }
        }
        out
    }
}

/// Chained construction of an [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: CompareConfig,
}

impl EngineBuilder {
    /// Restrict the engine to the named metrics. Output order is always
    /// registry order.
    #[must_use]
    pub fn metrics<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.metrics = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: ComparisonUnit) -> Self {
        self.config.unit = unit;
        self
    }

    #[must_use]
    pub fn normalization(mut self, mode: NormalizationMode) -> Self {
        self.config.normalization = Some(mode);
        self
    }

    /// Jaro-Winkler prefix weight. Values above 0.25 would let similarity
    /// exceed 1.0 and are clamped with a warning; non-finite values are
    /// rejected by [`EngineBuilder::build`].
    #[must_use]
    pub fn prefix_weight(mut self, weight: f64) -> Self {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, MAX_PREFIX_WEIGHT)
        } else {
            weight
        };
        if clamped != weight {
            log::warn!(
                "prefix_weight {} outside [0.0, {}], clamping to {}",
                weight,
                MAX_PREFIX_WEIGHT,
                clamped
            );
        }
        self.config.jaro_winkler.prefix_weight = clamped;
        self
    }

    /// Jaro-Winkler prefix cap. [`EngineBuilder::build`] rejects a cap whose
    /// product with the prefix weight reaches 1.0.
    #[must_use]
    pub fn max_prefix_length(mut self, length: usize) -> Self {
        self.config.jaro_winkler.max_prefix_length = length;
        self
    }

    /// # Errors
    ///
    /// Same as [`Engine::new`].
    pub fn build(self) -> Result<Engine> {
        Engine::new(self.config)
    }
}

impl From<CompareConfig> for EngineBuilder {
    fn from(config: CompareConfig) -> Self {
        Self { config }
    }
}

static DEFAULT_ENGINE: OnceLock<Engine> = OnceLock::new();

/// Compare two strings with every registered metric, counting `char`s and
/// applying no normalization.
///
/// # Example
///
/// ```rust
/// let result = string_compare::compare("kitten", "sitting");
/// let (raw, normalized) = result.get("levenshtein").unwrap();
/// assert_eq!(raw, 3.0);
/// assert!((normalized - 3.0 / 7.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Comparison {
    DEFAULT_ENGINE.get_or_init(Engine::default).compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;

    #[test]
    fn test_compare_covers_all_metrics() {
        let result = compare("kitten", "sitting");
        assert_eq!(result.len(), Metric::ALL.len() - 1);
        assert!(result.get("hamming").is_none());

        let result = compare("karolin", "kathrin");
        assert_eq!(result.len(), Metric::ALL.len());
        assert_eq!(result.get("hamming"), Some((3.0, 3.0 / 7.0)));
    }

    #[test]
    fn test_sequences_are_paired() {
        let result = compare("abcd", "ab");
        assert_eq!(result.unnormalized.len(), result.normalized.len());
        for (raw, norm) in result.unnormalized.iter().zip(&result.normalized) {
            assert_eq!(raw.name, norm.name);
        }
    }

    #[test]
    fn test_selection_order() {
        let engine = Engine::builder()
            .metrics(["length", "jaro", "levenshtein"])
            .build()
            .unwrap();
        let names: Vec<_> = engine.compare("abc", "abd").names().collect();
        assert_eq!(names, vec!["levenshtein", "jaro", "length"]);
    }

    #[test]
    fn test_baseline() {
        let engine = Engine::builder().metrics(["hamming", "cosine"]).build().unwrap();
        let baseline = engine.baseline();
        assert_eq!(baseline, engine.compare("", ""));
        assert_eq!(baseline.get("hamming"), Some((0.0, 0.0)));
    }

    #[test]
    fn test_grapheme_unit() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        let by_char = Engine::builder().metrics(["levenshtein"]).build().unwrap();
        let by_grapheme = Engine::builder()
            .metrics(["levenshtein"])
            .unit(ComparisonUnit::Grapheme)
            .build()
            .unwrap();
        assert_eq!(by_grapheme.compare(family, "").get("levenshtein"), Some((1.0, 1.0)));
        assert_eq!(by_char.compare(family, "").get("levenshtein"), Some((5.0, 1.0)));
    }

    #[test]
    fn test_normalization_applied() {
        let engine = Engine::builder()
            .metrics(["levenshtein"])
            .normalization(NormalizationMode::Lowercase)
            .build()
            .unwrap();
        assert_eq!(engine.compare("HELLO", "hello").get("levenshtein"), Some((0.0, 0.0)));
    }

    #[test]
    fn test_builder_clamps_prefix_weight() {
        let engine = Engine::builder()
            .prefix_weight(0.9)
            .max_prefix_length(3)
            .build()
            .unwrap();
        assert_eq!(engine.jaro_winkler.prefix_weight, MAX_PREFIX_WEIGHT);

        let err = Engine::builder().prefix_weight(f64::NAN).build().unwrap_err();
        assert!(matches!(err, CompareError::InvalidParameter { .. }));
    }

    #[test]
    fn test_long_prefix_cap_rejected() {
        let err = Engine::builder()
            .metrics(["jaro_winkler"])
            .prefix_weight(0.25)
            .max_prefix_length(10)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            CompareError::InvalidParameter { name: "jaro_winkler.max_prefix_length", .. }
        ));

        // the longest cap the default weight allows still separates these
        let engine = Engine::builder()
            .metrics(["jaro_winkler"])
            .max_prefix_length(9)
            .build()
            .unwrap();
        let (raw, normalized) = engine.compare("abcdefghij", "abcdefghik").get("jaro_winkler").unwrap();
        assert!(raw > 0.0);
        assert!(normalized > 0.0);
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = Engine::builder().metrics(["length"]).build().unwrap();
        let pairs: Vec<(String, String)> = (0..PARALLEL_THRESHOLD + 20)
            .map(|i| ("x".repeat(i), String::new()))
            .collect();
        let results = engine.compare_batch(&pairs);
        assert_eq!(results.len(), pairs.len());
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.get("length").map(|(raw, _)| raw), Some(i as f64));
        }

        let small = engine.compare_batch(&[("ab", "abcd"), ("", "")]);
        assert_eq!(small[0].get("length"), Some((2.0, 0.5)));
        assert_eq!(small[1].get("length"), Some((0.0, 0.0)));
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Engine>();
    }
}
