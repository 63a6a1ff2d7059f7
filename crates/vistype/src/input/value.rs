//! Raw cell values as handed over by dataset ingestion.

use serde::{Deserialize, Serialize};

/// A single scalar cell value.
///
/// A key missing from a row record stands in for "undefined"; together
/// with [`RawValue::Null`] and empty text it counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Null,
}

/// Hashable identity of a raw value, used for distinct-value counting.
///
/// Text and numbers never compare equal to each other, `-0.0` equals `0.0`
/// and every NaN equals every other NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistinctKey<'a> {
    Null,
    Text(&'a str),
    Number(u64),
}

impl RawValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        RawValue::Text(value.into())
    }

    /// Returns true for null and empty text.
    pub fn is_absent(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Text(s) => s.is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// Returns true if the runtime value is text.
    pub fn is_text(&self) -> bool {
        matches!(self, RawValue::Text(_))
    }

    /// Borrow the text content, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading of the value.
    ///
    /// Numbers other than NaN are returned as-is. Text is trimmed and
    /// parsed; whitespace-only text and text that parses to NaN are not
    /// numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) if !n.is_nan() => Some(*n),
            RawValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
            }
            _ => None,
        }
    }

    /// Returns true if [`RawValue::as_number`] yields a value.
    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }

    /// Identity used when counting distinct values.
    pub fn distinct_key(&self) -> DistinctKey<'_> {
        match self {
            RawValue::Null => DistinctKey::Null,
            RawValue::Text(s) => DistinctKey::Text(s),
            RawValue::Number(n) => {
                let canonical = if n.is_nan() {
                    f64::NAN
                } else if *n == 0.0 {
                    0.0
                } else {
                    *n
                };
                DistinctKey::Number(canonical.to_bits())
            }
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}
