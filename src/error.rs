//! Error types

use thiserror::Error;

/// Errors raised by the metric registry and engine configuration.
///
/// None of these surface from [`crate::compare`] or [`crate::Engine::compare`];
/// they come from registry lookups and from validating a [`crate::CompareConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// Name does not match any registered metric
    #[error("Unknown metric: '{0}'")]
    UnknownMetric(String),

    /// Length-sensitive metric received operands of different length
    #[error("Metric '{metric}' requires equal lengths, got {len_a} and {len_b}")]
    LengthMismatch {
        metric: &'static str,
        len_a: usize,
        len_b: usize,
    },

    /// The same metric was selected more than once
    #[error("Duplicate metric in selection: '{0}'")]
    DuplicateMetric(String),

    /// The metric selection is empty
    #[error("Metric selection must contain at least one metric")]
    EmptySelection,

    /// A configuration value is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CompareError>;
