//! Input preprocessing
//!
//! Preprocessing modes applied to both operands before they are split into
//! comparison units.

use crate::error::CompareError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Preprocessing applied to both inputs before comparison.
///
/// Deserializes through [`FromStr`], so configuration files get the same
/// aliases and case folding as parsed names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum NormalizationMode {
    Lowercase,
    /// Compatibility decomposition, so ligatures split and accents detach
    UnicodeNfkd,
    /// Drop ASCII punctuation
    RemovePunctuation,
    RemoveWhitespace,
    /// NFKD, then lowercase, then drop punctuation and whitespace
    Strict,
}

impl FromStr for NormalizationMode {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lowercase" => Ok(Self::Lowercase),
            "unicode_nfkd" | "nfkd" => Ok(Self::UnicodeNfkd),
            "remove_punctuation" => Ok(Self::RemovePunctuation),
            "remove_whitespace" => Ok(Self::RemoveWhitespace),
            "strict" => Ok(Self::Strict),
            _ => Err(CompareError::InvalidParameter {
                name: "normalization",
                reason: format!(
                    "unknown mode '{}'; valid: lowercase, unicode_nfkd, remove_punctuation, remove_whitespace, strict",
                    s
                ),
            }),
        }
    }
}

impl TryFrom<String> for NormalizationMode {
    type Error = CompareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Apply `mode` to a single string.
#[must_use]
pub fn normalize_string(s: &str, mode: NormalizationMode) -> String {
    match mode {
        NormalizationMode::Lowercase => s.to_lowercase(),
        NormalizationMode::UnicodeNfkd => s.nfkd().collect(),
        NormalizationMode::RemovePunctuation => {
            s.chars().filter(|c| !c.is_ascii_punctuation()).collect()
        }
        NormalizationMode::RemoveWhitespace => s.chars().filter(|c| !c.is_whitespace()).collect(),
        NormalizationMode::Strict => s
            .nfkd()
            .collect::<String>()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .collect(),
    }
}

/// Normalize both strings, borrowing them untouched when no mode is set.
#[must_use]
pub fn normalize_pair<'a>(
    a: &'a str,
    b: &'a str,
    mode: Option<NormalizationMode>,
) -> (Cow<'a, str>, Cow<'a, str>) {
    match mode {
        None => (Cow::Borrowed(a), Cow::Borrowed(b)),
        Some(mode) => (
            Cow::Owned(normalize_string(a, mode)),
            Cow::Owned(normalize_string(b, mode)),
        ),
    }
}
