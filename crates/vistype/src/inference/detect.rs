//! Field detection over whole datasets.

use crate::input::{count_distinct, Dataset};
use crate::schema::FieldDescriptor;

use super::classifier::FieldTypeClassifier;

impl FieldTypeClassifier {
    /// Build one descriptor per column of the dataset.
    ///
    /// Columns are the first row's keys, in that row's order. Types come
    /// from the sampled values; unique counts cover every row.
    pub fn detect_fields(&self, dataset: &Dataset) -> Vec<FieldDescriptor> {
        let columns = dataset.column_names();
        log::debug!(
            "Detecting {} fields over {} rows",
            columns.len(),
            dataset.row_count()
        );

        columns
            .into_iter()
            .map(|name| {
                let field_type = self.classify(dataset.column_values(name), Some(name));
                let unique_count = count_distinct(dataset.column_values(name));
                FieldDescriptor::new(name, field_type, unique_count)
            })
            .collect()
    }
}

/// Detect fields with the default thresholds.
pub fn detect_fields(dataset: &Dataset) -> Vec<FieldDescriptor> {
    FieldTypeClassifier::new().detect_fields(dataset)
}
