//! In-memory tabular datasets made of row records.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::Result;
use super::parser::Parser;
use super::value::RawValue;

/// One row record: column name to raw value, in source key order.
pub type Row = IndexMap<String, RawValue>;

/// Represents a loaded dataset as an ordered sequence of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Row records in source order.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load a JSON records file with the default parser.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Parser::new().parse_file(path)
    }

    /// Load JSON records from a reader with the default parser.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Parser::new().parse_reader(reader)
    }

    /// Load JSON records from a string with the default parser.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Parser::new().parse_str(contents)
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, taken from the keys of the first row.
    pub fn column_names(&self) -> Vec<&str> {
        self.rows
            .first()
            .map(|row| row.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    /// All values for a column in row order.
    ///
    /// Rows without the key are skipped; they hold no value at all.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RawValue> + 'a {
        self.rows.iter().filter_map(move |row| row.get(name))
    }

    /// Count of distinct non-absent values across the whole column.
    pub fn unique_count(&self, name: &str) -> usize {
        count_distinct(self.column_values(name))
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Count distinct non-absent values.
pub(crate) fn count_distinct<'a>(values: impl IntoIterator<Item = &'a RawValue>) -> usize {
    values
        .into_iter()
        .filter(|v| !v.is_absent())
        .map(RawValue::distinct_key)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, RawValue)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_column_names_follow_first_row() {
        let dataset = Dataset::new(vec![
            row(&[("b", 1.into()), ("a", "x".into())]),
            row(&[("a", "y".into()), ("c", 2.into())]),
        ]);
        assert_eq!(dataset.column_names(), vec!["b", "a"]);
    }

    #[test]
    fn test_column_values_skip_missing_keys() {
        let dataset = Dataset::new(vec![
            row(&[("a", 1.into())]),
            row(&[("b", 2.into())]),
            row(&[("a", RawValue::Null)]),
        ]);
        let values: Vec<&RawValue> = dataset.column_values("a").collect();
        assert_eq!(values, vec![&RawValue::Number(1.0), &RawValue::Null]);
    }

    #[test]
    fn test_unique_count_ignores_absent() {
        let dataset = Dataset::new(vec![
            row(&[("a", "x".into())]),
            row(&[("a", "".into())]),
            row(&[("a", RawValue::Null)]),
            row(&[("a", "x".into())]),
            row(&[("a", "y".into())]),
            row(&[("a", 1.into())]),
            row(&[("a", "1".into())]),
        ]);
        assert_eq!(dataset.unique_count("a"), 4);
        assert_eq!(dataset.unique_count("missing"), 0);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.column_names().is_empty());
    }
}
