//! vistype: semantic field type detection for chart encoding defaults.
//!
//! Given the raw values of a column and, optionally, its name, vistype
//! decides whether the column is quantitative, nominal, ordinal or temporal
//! so that a chart layer can pick encodings without asking the user.
//!
//! # Core Principles
//!
//! - **Ordered checks**: temporal, then ordinal vocabulary, then numeric and
//!   identifier rules, then the nominal fallback. The first match wins.
//! - **Total**: every input, including an empty column, gets a type.
//! - **Pure**: the same values and name always produce the same type.
//!
//! # Example
//!
//! ```
//! use vistype::{classify, RawValue, SemanticType};
//!
//! let values: Vec<RawValue> = ["2023-01-15", "2023-02-20", "2023-03-10"]
//!     .into_iter()
//!     .map(RawValue::from)
//!     .collect();
//!
//! assert_eq!(classify(&values, Some("order_date")), SemanticType::Temporal);
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod schema;

pub use error::{Result, VistypeError};
pub use inference::{
    classify, detect_fields, explain, Check, Classification, ClassifierConfig,
    FieldTypeClassifier,
};
pub use input::{Dataset, Parser, ParserConfig, RawValue, Row};
pub use schema::{FieldDescriptor, SemanticType};
