//! Semantic types and the field descriptors built from them.

mod field;
mod types;

pub use field::FieldDescriptor;
pub use types::SemanticType;
