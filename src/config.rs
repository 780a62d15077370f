//! Engine configuration
//!
//! [`CompareConfig`] is plain data and deserializes with every field optional,
//! so a host can keep it in a JSON or TOML file. Validation happens once, when
//! an [`crate::Engine`] is built from it.

use crate::algorithms::jaro::{JaroWinklerConfig, MAX_PREFIX_WEIGHT};
use crate::algorithms::normalize::NormalizationMode;
use crate::error::{CompareError, Result};
use crate::registry::Metric;
use serde::{Deserialize, Serialize};

/// Element a string is split into before comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonUnit {
    /// Unicode scalar values
    #[default]
    Char,
    /// Extended grapheme clusters, so "e\u{301}" or an emoji ZWJ sequence is one unit
    Grapheme,
}

/// Configuration for an [`crate::Engine`].
///
/// # Example
///
/// ```rust
/// use string_compare::{CompareConfig, ComparisonUnit, Engine};
///
/// let config = CompareConfig {
///     metrics: Some(vec!["levenshtein".into(), "jaro_winkler".into()]),
///     unit: ComparisonUnit::Grapheme,
///     ..CompareConfig::default()
/// };
/// let engine = Engine::new(config).unwrap();
/// assert_eq!(engine.metrics().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Metrics to compute, by name or alias. `None` selects every metric.
    pub metrics: Option<Vec<String>>,
    /// Unit the inputs are split into
    pub unit: ComparisonUnit,
    /// Preprocessing applied to both inputs
    pub normalization: Option<NormalizationMode>,
    /// Jaro-Winkler parameters
    pub jaro_winkler: JaroWinklerConfig,
}

impl CompareConfig {
    /// Resolve the metric selection into registry order.
    ///
    /// # Errors
    ///
    /// - [`CompareError::EmptySelection`] for an empty list
    /// - [`CompareError::UnknownMetric`] for an unregistered name
    /// - [`CompareError::DuplicateMetric`] when two entries name the same metric
    pub fn resolve_metrics(&self) -> Result<Vec<Metric>> {
        let names = match &self.metrics {
            None => return Ok(Metric::ALL.to_vec()),
            Some(names) => names,
        };

        if names.is_empty() {
            return Err(CompareError::EmptySelection);
        }

        let mut selected: Vec<Metric> = Vec::with_capacity(names.len());
        for name in names {
            let metric: Metric = name.parse()?;
            if selected.contains(&metric) {
                return Err(CompareError::DuplicateMetric(name.clone()));
            }
            selected.push(metric);
        }

        // Output always follows registry order, whatever order was requested
        selected.sort_unstable();
        Ok(selected)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidParameter`] if the Jaro-Winkler prefix
    /// weight is not a finite number in [0.0, 0.25], or if
    /// `prefix_weight * max_prefix_length` reaches 1.0. At that point a shared
    /// prefix lifts the similarity of two different strings to 1.0.
    pub fn validate(&self) -> Result<()> {
        let weight = self.jaro_winkler.prefix_weight;
        let max_prefix_length = self.jaro_winkler.max_prefix_length;
        if !weight.is_finite() || !(0.0..=MAX_PREFIX_WEIGHT).contains(&weight) {
            return Err(CompareError::InvalidParameter {
                name: "jaro_winkler.prefix_weight",
                reason: format!(
                    "must be in range [0.0, {}], got {} (values > {} can produce scores > 1.0)",
                    MAX_PREFIX_WEIGHT, weight, MAX_PREFIX_WEIGHT
                ),
            });
        }

        let max_boost = weight * max_prefix_length as f64;
        if max_boost >= 1.0 {
            return Err(CompareError::InvalidParameter {
                name: "jaro_winkler.max_prefix_length",
                reason: format!(
                    "prefix_weight {} x max_prefix_length {} = {}, must stay below 1.0",
                    weight, max_prefix_length, max_boost
                ),
            });
        }
        Ok(())
    }
}
