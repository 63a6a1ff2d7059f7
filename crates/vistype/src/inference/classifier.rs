//! Field type classification: configuration and the decision chain driver.

use once_cell::sync::Lazy;

use crate::error::{Result, VistypeError};
use crate::input::RawValue;
use crate::schema::SemanticType;

use super::checks::{Check, Classification, Sample, CHECKS};

/// Values examined per column.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

static DEFAULT_CLASSIFIER: Lazy<FieldTypeClassifier> = Lazy::new(FieldTypeClassifier::new);

/// Thresholds used by the classification checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Leading non-absent values kept per column.
    pub sample_size: usize,
    /// Minimum share of text values for the temporal check to run.
    pub temporal_text_ratio: f64,
    /// Minimum share of text values with a date shape.
    pub temporal_match_ratio: f64,
    /// Minimum share of values found in an ordinal vocabulary.
    pub ordinal_vocabulary_ratio: f64,
    /// Distinct values needed before text can be ordinal.
    pub min_ordinal_distinct: usize,
    /// Sequential ratio above which integers are identifiers.
    pub sequential_id_ratio: f64,
    /// Mean above which integers need less run structure to be identifiers.
    pub large_id_mean: f64,
    /// Sequential ratio required of large integers.
    pub large_id_sequential_ratio: f64,
    /// Integer range above which a column is quantitative.
    pub quantitative_range: f64,
    /// Most distinct integers an ordinal scale may have.
    pub ordinal_max_distinct: usize,
    /// Widest integer range an ordinal scale may have.
    pub ordinal_max_range: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            temporal_text_ratio: 0.8,
            temporal_match_ratio: 0.8,
            ordinal_vocabulary_ratio: 0.5,
            min_ordinal_distinct: 2,
            sequential_id_ratio: 0.7,
            large_id_mean: 10_000.0,
            large_id_sequential_ratio: 0.3,
            quantitative_range: 100.0,
            ordinal_max_distinct: 20,
            ordinal_max_range: 20.0,
        }
    }
}

impl ClassifierConfig {
    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(VistypeError::Config(
                "sample_size must be at least 1".to_string(),
            ));
        }

        let ratios = [
            ("temporal_text_ratio", self.temporal_text_ratio),
            ("temporal_match_ratio", self.temporal_match_ratio),
            ("ordinal_vocabulary_ratio", self.ordinal_vocabulary_ratio),
            ("sequential_id_ratio", self.sequential_id_ratio),
            ("large_id_sequential_ratio", self.large_id_sequential_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(VistypeError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        let bounds = [
            ("large_id_mean", self.large_id_mean),
            ("quantitative_range", self.quantitative_range),
            ("ordinal_max_range", self.ordinal_max_range),
        ];
        for (name, value) in bounds {
            if value.is_nan() || value < 0.0 {
                return Err(VistypeError::Config(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Infers the semantic type of a column from its values and name.
#[derive(Debug, Clone, Default)]
pub struct FieldTypeClassifier {
    config: ClassifierConfig,
}

impl FieldTypeClassifier {
    /// Create a classifier with default thresholds.
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    /// Create a classifier with custom thresholds.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The thresholds in use.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Resolve the semantic type of a column.
    pub fn classify<'a>(
        &self,
        values: impl IntoIterator<Item = &'a RawValue>,
        field_name: Option<&str>,
    ) -> SemanticType {
        self.explain(values, field_name).semantic_type
    }

    /// Resolve the semantic type along with the check that decided it.
    ///
    /// Checks run in fixed priority order and the first match wins.
    /// Anything left unresolved is nominal.
    pub fn explain<'a>(
        &self,
        values: impl IntoIterator<Item = &'a RawValue>,
        field_name: Option<&str>,
    ) -> Classification {
        let label = field_name.unwrap_or("<unnamed>");

        let Some(sample) = Sample::collect(values, self.config.sample_size) else {
            log::debug!("{}: no values present, defaulting to nominal", label);
            return Classification::new(SemanticType::Nominal, Check::Preprocess);
        };

        log::trace!(
            "{}: sampled {} values ({} distinct)",
            label,
            sample.len(),
            sample.distinct_count()
        );

        let decided = CHECKS
            .iter()
            .find_map(|check| check(&sample, field_name, &self.config))
            .unwrap_or(Classification::new(SemanticType::Nominal, Check::Fallback));

        log::debug!(
            "{}: {} (decided by {:?})",
            label,
            decided.semantic_type,
            decided.check
        );
        decided
    }
}

/// Classify a column with the default thresholds.
pub fn classify<'a>(
    values: impl IntoIterator<Item = &'a RawValue>,
    field_name: Option<&str>,
) -> SemanticType {
    DEFAULT_CLASSIFIER.classify(values, field_name)
}

/// Classify a column with the default thresholds and report the deciding check.
pub fn explain<'a>(
    values: impl IntoIterator<Item = &'a RawValue>,
    field_name: Option<&str>,
) -> Classification {
    DEFAULT_CLASSIFIER.explain(values, field_name)
}
