//! Static pattern tables consulted by the classifier.
//!
//! Each table is plain data compiled into regexes once on first use.
//! Supporting a new date shape, vocabulary or identifier suffix means adding
//! an entry here.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// DATE SHAPES
// =============================================================================
// Strict shapes only. Lenient date parsing would accept bare integers such
// as 20230115 or single years.

/// Named date-shape patterns, tried in order.
pub const DATE_SHAPES: &[(&str, &str)] = &[
    ("iso_date", r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$"),
    ("iso_datetime", r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}"),
    ("slash_date", r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}$"),
    ("dash_date", r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{2,4}$"),
];

static DATE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    DATE_SHAPES
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
});

/// Name of the first date shape the text matches.
pub fn date_shape(value: &str) -> Option<&'static str> {
    DATE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(value))
        .map(|(name, _)| *name)
}

/// Returns true if the text has one of the accepted date shapes.
pub fn looks_like_date(value: &str) -> bool {
    date_shape(value).is_some()
}

// =============================================================================
// ORDINAL VOCABULARIES
// =============================================================================

/// Known ordered vocabularies, lowest rank first.
pub const ORDINAL_VOCABULARIES: &[(&str, &[&str])] = &[
    (
        "size",
        &[
            "xxs", "xs", "s", "m", "l", "xl", "xxl", "xxxl",
            "x-small", "small", "medium", "large", "x-large", "xx-large",
        ],
    ),
    ("priority", &["low", "medium", "high", "critical", "urgent"]),
    ("quality", &["poor", "fair", "good", "excellent", "outstanding"]),
    (
        "agreement",
        &["strongly disagree", "disagree", "neutral", "agree", "strongly agree"],
    ),
];

static ORDINAL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    ORDINAL_VOCABULARIES
        .iter()
        .map(|(name, terms)| {
            let alternatives: Vec<String> = terms.iter().map(|t| regex::escape(t)).collect();
            let pattern = format!("(?i)^(?:{})$", alternatives.join("|"));
            (*name, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Name of the first vocabulary containing the whole value, ignoring case.
pub fn ordinal_vocabulary(value: &str) -> Option<&'static str> {
    ORDINAL_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(value))
        .map(|(name, _)| *name)
}

// =============================================================================
// IDENTIFIER NAMES
// =============================================================================

/// Column-name endings that mark a surrogate key. A bare `id` matches too.
pub const IDENTIFIER_NAME_SUFFIXES: &[&str] = &["id", "_id", "code", "key", "_key"];

static IDENTIFIER_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let suffixes: Vec<String> = IDENTIFIER_NAME_SUFFIXES
        .iter()
        .map(|s| regex::escape(s))
        .collect();
    Regex::new(&format!("(?i)^id$|(?:{})$", suffixes.join("|"))).unwrap()
});

/// Returns true if the column name declares an identifier.
pub fn is_identifier_name(name: &str) -> bool {
    IDENTIFIER_NAME_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shapes() {
        assert_eq!(date_shape("2023-01-15"), Some("iso_date"));
        assert_eq!(date_shape("2023-01-15T10:30:00Z"), Some("iso_datetime"));
        assert_eq!(date_shape("2023-01-15T10:30:00.123+02:00"), Some("iso_datetime"));
        assert_eq!(date_shape("1/5/23"), Some("slash_date"));
        assert_eq!(date_shape("12/31/2023"), Some("slash_date"));
        assert_eq!(date_shape("1-5-23"), Some("dash_date"));
        assert_eq!(date_shape("12-31-2023"), Some("dash_date"));
    }

    #[test]
    fn test_rejects_non_dates() {
        assert!(!looks_like_date("20230115"));
        assert!(!looks_like_date("2023"));
        assert!(!looks_like_date("2023-01-15 extra"));
        assert!(!looks_like_date("Jan 15, 2023"));
        assert!(!looks_like_date("123/45/6789"));
        assert!(!looks_like_date("not-a-date"));
        assert!(!looks_like_date(""));
    }

    #[test]
    fn test_ordinal_vocabulary_case_insensitive() {
        assert_eq!(ordinal_vocabulary("XL"), Some("size"));
        assert_eq!(ordinal_vocabulary("x-large"), Some("size"));
        assert_eq!(ordinal_vocabulary("Critical"), Some("priority"));
        assert_eq!(ordinal_vocabulary("EXCELLENT"), Some("quality"));
        assert_eq!(ordinal_vocabulary("Strongly Agree"), Some("agreement"));
        // medium appears in the size scale before the priority scale
        assert_eq!(ordinal_vocabulary("Medium"), Some("size"));
    }

    #[test]
    fn test_ordinal_vocabulary_whole_value() {
        assert_eq!(ordinal_vocabulary("lowest"), None);
        assert_eq!(ordinal_vocabulary("very high"), None);
        assert_eq!(ordinal_vocabulary("Red"), None);
        assert_eq!(ordinal_vocabulary(" low"), None);
    }

    #[test]
    fn test_identifier_names() {
        assert!(is_identifier_name("id"));
        assert!(is_identifier_name("ID"));
        assert!(is_identifier_name("customer_id"));
        assert!(is_identifier_name("CustomerId"));
        assert!(is_identifier_name("zip_code"));
        assert!(is_identifier_name("postcode"));
        assert!(is_identifier_name("api_key"));
        assert!(is_identifier_name("PrimaryKey"));
        assert!(!is_identifier_name("price"));
        assert!(!is_identifier_name("identity_score"));
        assert!(!is_identifier_name("keys"));
        assert!(!is_identifier_name(""));
    }
}
