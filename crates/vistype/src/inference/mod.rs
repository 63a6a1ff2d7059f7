//! Inference engine for semantic field types.

mod checks;
mod classifier;
mod detect;
pub mod patterns;

pub use checks::{
    looks_like_identifier, numeric_check, ordinal_string_check, sequential_ratio,
    temporal_check, Check, CheckFn, Classification, Sample, CHECKS,
};
pub use classifier::{classify, explain, ClassifierConfig, FieldTypeClassifier, DEFAULT_SAMPLE_SIZE};
pub use detect::detect_fields;
