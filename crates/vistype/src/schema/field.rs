//! Detected field descriptors handed to chart-encoding consumers.

use serde::{Deserialize, Serialize};

use super::types::SemanticType;

/// Resolved type information for one column of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// Resolved semantic type.
    #[serde(rename = "type")]
    pub field_type: SemanticType,
    /// Distinct non-absent values across the full column.
    pub unique_count: usize,
}

impl FieldDescriptor {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, field_type: SemanticType, unique_count: usize) -> Self {
        Self {
            name: name.into(),
            field_type,
            unique_count,
        }
    }

    /// Flip between ordinal and nominal.
    ///
    /// This is the only user override consumers offer. Returns false and
    /// leaves the descriptor untouched for quantitative or temporal fields.
    pub fn toggle_order(&mut self) -> bool {
        self.field_type = match self.field_type {
            SemanticType::Ordinal => SemanticType::Nominal,
            SemanticType::Nominal => SemanticType::Ordinal,
            _ => return false,
        };
        true
    }
}
