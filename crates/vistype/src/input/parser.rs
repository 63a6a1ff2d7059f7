//! Scalarisation of decoded JSON records into rows of raw values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Result, VistypeError};
use super::source::{Dataset, Row};
use super::value::RawValue;

/// Rows accepted before a dataset is rejected as oversized.
pub const DEFAULT_MAX_ROWS: usize = 100_000;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Maximum rows to accept (None = unbounded).
    pub max_rows: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_rows: Some(DEFAULT_MAX_ROWS),
        }
    }
}

/// Turns an array of flat JSON objects into a [`Dataset`].
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON records file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| VistypeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = String::new();
        BufReader::new(file)
            .read_to_string(&mut contents)
            .map_err(|e| VistypeError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!("Read {} bytes from {}", contents.len(), path.display());
        self.parse_str(&contents)
    }

    /// Parse JSON records from any reader.
    pub fn parse_reader(&self, reader: impl Read) -> Result<Dataset> {
        let mut contents = String::new();
        BufReader::new(reader)
            .read_to_string(&mut contents)
            .map_err(|e| VistypeError::Io {
                path: "<reader>".into(),
                source: e,
            })?;
        self.parse_str(&contents)
    }

    /// Parse JSON records from a string.
    pub fn parse_str(&self, contents: &str) -> Result<Dataset> {
        if contents.trim().is_empty() {
            return Err(VistypeError::EmptyData("No JSON content found".to_string()));
        }

        let value: Value = serde_json::from_str(contents)?;
        self.parse_value(value)
    }

    /// Scalarise an already decoded JSON document.
    pub fn parse_value(&self, value: Value) -> Result<Dataset> {
        let Value::Array(records) = value else {
            return Err(VistypeError::InvalidRecord {
                row: 0,
                message: "expected a top-level array of records".to_string(),
            });
        };

        if let Some(limit) = self.config.max_rows {
            if records.len() > limit {
                return Err(VistypeError::TooManyRows {
                    rows: records.len(),
                    limit,
                });
            }
        }

        let rows = records
            .into_iter()
            .enumerate()
            .map(|(row_idx, record)| parse_record(row_idx, record))
            .collect::<Result<Vec<Row>>>()?;

        Ok(Dataset::new(rows))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one JSON object into a row, keeping key order.
fn parse_record(row: usize, record: Value) -> Result<Row> {
    let Value::Object(fields) = record else {
        return Err(VistypeError::InvalidRecord {
            row,
            message: format!("expected an object, found {}", json_kind(&record)),
        });
    };

    let mut parsed = IndexMap::with_capacity(fields.len());
    for (key, value) in fields {
        let raw = scalarize(row, &key, value)?;
        parsed.insert(key, raw);
    }
    Ok(parsed)
}

/// Coerce a JSON scalar into a raw cell value.
fn scalarize(row: usize, key: &str, value: Value) -> Result<RawValue> {
    match value {
        Value::Null => Ok(RawValue::Null),
        Value::String(s) => Ok(RawValue::Text(s)),
        Value::Bool(b) => Ok(RawValue::Text(b.to_string())),
        Value::Number(n) => n.as_f64().map(RawValue::Number).ok_or_else(|| {
            VistypeError::InvalidRecord {
                row,
                message: format!("field '{}' holds a number outside f64 range", key),
            }
        }),
        other => Err(VistypeError::InvalidRecord {
            row,
            message: format!("field '{}' holds a nested {}", key, json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
