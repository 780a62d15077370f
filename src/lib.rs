//! string-compare - Multi-metric string distance library
//!
//! Compares two strings under a fixed, ordered registry of distance metrics
//! and reports every result twice: as the raw distance and normalized into
//! [0.0, 1.0].
//!
//! # Features
//! - Twenty-two metrics across edit, sequence, token and naive families
//! - `char` or grapheme-cluster comparison units
//! - Optional case, Unicode and punctuation normalization
//! - Parallel batch comparison
//!
//! # Example
//!
//! ```rust
//! use string_compare::{compare, list_metrics};
//!
//! let result = compare("", "abc");
//! assert_eq!(result.get("levenshtein"), Some((3.0, 1.0)));
//! assert_eq!(list_metrics()[0], "levenshtein");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod algorithms;
pub mod config;
pub mod engine;
pub mod error;
pub mod registry;

// ============================================================================
// Re-exports
// ============================================================================

pub use algorithms::jaro::JaroWinklerConfig;
pub use algorithms::normalize::NormalizationMode;
pub use config::{CompareConfig, ComparisonUnit};
pub use engine::{compare, Comparison, Engine, EngineBuilder, NamedDistance, PARALLEL_THRESHOLD};
pub use error::{CompareError, Result};
pub use registry::{
    compute_raw, list_metrics, lookup, normalize, registry, Family, MaxDistance, Metric,
    MetricDescriptor,
};
