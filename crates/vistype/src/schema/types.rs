//! Core type definitions for semantic field types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VistypeError;

/// Inferred statistical role of a column, used to pick chart encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Continuous or count-like numbers.
    Quantitative,
    /// Unordered categories, including identifiers.
    Nominal,
    /// Ordered categories (sizes, priorities, rating scales).
    Ordinal,
    /// Dates and date-times.
    Temporal,
}

impl SemanticType {
    /// All semantic types, in the order the classifier prefers them.
    pub const ALL: [SemanticType; 4] = [
        SemanticType::Temporal,
        SemanticType::Ordinal,
        SemanticType::Nominal,
        SemanticType::Quantitative,
    ];

    /// Lowercase name used in serialized descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Quantitative => "quantitative",
            SemanticType::Nominal => "nominal",
            SemanticType::Ordinal => "ordinal",
            SemanticType::Temporal => "temporal",
        }
    }

    /// Returns true for the two categorical types a user may toggle between.
    pub fn is_categorical(&self) -> bool {
        matches!(self, SemanticType::Nominal | SemanticType::Ordinal)
    }
}

impl Default for SemanticType {
    fn default() -> Self {
        SemanticType::Nominal
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = VistypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantitative" => Ok(SemanticType::Quantitative),
            "nominal" => Ok(SemanticType::Nominal),
            "ordinal" => Ok(SemanticType::Ordinal),
            "temporal" => Ok(SemanticType::Temporal),
            other => Err(VistypeError::Config(format!(
                "unknown semantic type '{}'",
                other
            ))),
        }
    }
}
