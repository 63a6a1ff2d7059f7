//! The ordered sub-checks that make up field type classification.
//!
//! Every check looks at the same [`Sample`] and either commits to a type or
//! passes. [`CHECKS`] fixes their precedence; later checks assume earlier
//! ones passed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::RawValue;
use crate::schema::SemanticType;

use super::classifier::ClassifierConfig;
use super::patterns;

/// The step of the decision chain that settled a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// No non-absent values were present.
    Preprocess,
    /// Mostly text with date shapes.
    Temporal,
    /// Text drawn from a known ordered vocabulary.
    OrdinalVocabulary,
    /// Numeric column whose name declares an identifier.
    IdentifierName,
    /// Integer column shaped like a surrogate key.
    IdentifierShape,
    /// Numeric column resolved by range and cardinality.
    Numeric,
    /// Nothing else matched.
    Fallback,
}

/// A check's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Resolved semantic type.
    pub semantic_type: SemanticType,
    /// The check that resolved it.
    pub check: Check,
}

impl Classification {
    pub fn new(semantic_type: SemanticType, check: Check) -> Self {
        Self {
            semantic_type,
            check,
        }
    }
}

/// Signature shared by every sub-check.
pub type CheckFn = fn(&Sample<'_>, Option<&str>, &ClassifierConfig) -> Option<Classification>;

/// Sub-checks in priority order. The fallback runs when all of them pass.
pub const CHECKS: &[CheckFn] = &[temporal_check, ordinal_string_check, numeric_check];

/// The leading non-absent values of a column.
#[derive(Debug, Clone)]
pub struct Sample<'a> {
    values: Vec<&'a RawValue>,
    distinct_count: usize,
}

impl<'a> Sample<'a> {
    /// Drop absent values and keep the first `limit` of the rest, in order.
    ///
    /// Returns `None` when nothing remains.
    pub fn collect(values: impl IntoIterator<Item = &'a RawValue>, limit: usize) -> Option<Self> {
        let values: Vec<&RawValue> = values
            .into_iter()
            .filter(|v| !v.is_absent())
            .take(limit)
            .collect();

        if values.is_empty() {
            return None;
        }

        let distinct_count = values
            .iter()
            .map(|v| v.distinct_key())
            .collect::<HashSet<_>>()
            .len();

        Some(Self {
            values,
            distinct_count,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Distinct values within the sample.
    pub fn distinct_count(&self) -> usize {
        self.distinct_count
    }

    pub fn values(&self) -> &[&'a RawValue] {
        &self.values
    }

    /// Sample members whose runtime value is text.
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.values.iter().copied().filter_map(RawValue::as_text)
    }

    /// Returns true if every member is text.
    pub fn all_text(&self) -> bool {
        self.values.iter().all(|v| v.is_text())
    }

    /// Numeric readings of every member, or `None` if any is not numeric.
    pub fn numbers(&self) -> Option<Vec<f64>> {
        self.values.iter().map(|v| v.as_number()).collect()
    }
}

// =============================================================================
// TEMPORAL
// =============================================================================

/// Mostly-text samples whose text has explicit date shapes.
pub fn temporal_check(
    sample: &Sample<'_>,
    _field_name: Option<&str>,
    config: &ClassifierConfig,
) -> Option<Classification> {
    let texts: Vec<&str> = sample.texts().collect();

    // Numeric columns never qualify, however year-like they look.
    if (texts.len() as f64) < config.temporal_text_ratio * sample.len() as f64 {
        return None;
    }

    let matches = texts.iter().filter(|t| patterns::looks_like_date(t)).count();
    log::trace!(
        "temporal check: {} of {} text values have date shapes",
        matches,
        texts.len()
    );

    if matches as f64 >= config.temporal_match_ratio * texts.len() as f64 {
        Some(Classification::new(SemanticType::Temporal, Check::Temporal))
    } else {
        None
    }
}

// =============================================================================
// ORDINAL STRINGS
// =============================================================================

/// All-text samples drawn mostly from a known ordered vocabulary.
pub fn ordinal_string_check(
    sample: &Sample<'_>,
    _field_name: Option<&str>,
    config: &ClassifierConfig,
) -> Option<Classification> {
    if !sample.all_text() || sample.distinct_count() < config.min_ordinal_distinct {
        return None;
    }

    let matches = sample
        .texts()
        .filter(|t| patterns::ordinal_vocabulary(t).is_some())
        .count();

    if matches as f64 >= config.ordinal_vocabulary_ratio * sample.len() as f64 {
        Some(Classification::new(
            SemanticType::Ordinal,
            Check::OrdinalVocabulary,
        ))
    } else {
        None
    }
}

// =============================================================================
// NUMERIC / IDENTIFIER
// =============================================================================

/// All-numeric samples: identifiers first, then range and cardinality rules.
pub fn numeric_check(
    sample: &Sample<'_>,
    field_name: Option<&str>,
    config: &ClassifierConfig,
) -> Option<Classification> {
    let numbers = sample.numbers()?;

    // Naming intent overrides value shape.
    if field_name.is_some_and(patterns::is_identifier_name) {
        return Some(Classification::new(
            SemanticType::Nominal,
            Check::IdentifierName,
        ));
    }

    let all_integers = numbers.iter().all(|n| is_integer(*n));
    if all_integers && looks_like_identifier(&numbers, config) {
        return Some(Classification::new(
            SemanticType::Nominal,
            Check::IdentifierShape,
        ));
    }

    let numeric = |semantic_type| Some(Classification::new(semantic_type, Check::Numeric));

    if !all_integers {
        return numeric(SemanticType::Quantitative);
    }

    let range = value_range(&numbers);
    if range > config.quantitative_range {
        return numeric(SemanticType::Quantitative);
    }

    // A constant column has nothing to rank.
    if sample.distinct_count() == 1 {
        return numeric(SemanticType::Quantitative);
    }

    if sample.distinct_count() <= config.ordinal_max_distinct && range <= config.ordinal_max_range {
        return numeric(SemanticType::Ordinal);
    }

    numeric(SemanticType::Quantitative)
}

/// Surrogate-key heuristic over an all-integer sample.
///
/// Dense runs are keys at any magnitude. Large values only need some run
/// structure.
pub fn looks_like_identifier(numbers: &[f64], config: &ClassifierConfig) -> bool {
    let ratio = sequential_ratio(numbers);
    let mean = numbers.iter().sum::<f64>() / numbers.len() as f64;

    log::trace!("identifier shape: sequential ratio {:.3}, mean {:.1}", ratio, mean);

    ratio > config.sequential_id_ratio
        || (mean > config.large_id_mean && ratio > config.large_id_sequential_ratio)
}

/// Fraction of adjacent gaps in ascending order that are exactly 1.
///
/// Fewer than two values have no gaps and score 0.
pub fn sequential_ratio(numbers: &[f64]) -> f64 {
    if numbers.len() < 2 {
        return 0.0;
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_by(f64::total_cmp);

    let unit_gaps = sorted.windows(2).filter(|w| w[1] - w[0] == 1.0).count();
    unit_gaps as f64 / (sorted.len() - 1) as f64
}

fn value_range(numbers: &[f64]) -> f64 {
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}
