//! Fuzz target for field type classification.
//!
//! This fuzzer tests that the classifier:
//! 1. Never panics on any mix of text, numbers and absent values
//! 2. Always returns the same type for the same input
//! 3. Regex-based date and vocabulary matching doesn't crash on pathological input

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vistype::{classify, RawValue};

#[derive(Debug, Arbitrary)]
enum Cell {
    Text(String),
    Number(f64),
    Null,
}

#[derive(Debug, Arbitrary)]
struct Column {
    name: Option<String>,
    cells: Vec<Cell>,
}

fuzz_target!(|column: Column| {
    // Only process reasonable-sized columns
    if column.cells.len() > 1_000 {
        return;
    }

    let values: Vec<RawValue> = column
        .cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Text(s) => RawValue::Text(s),
            Cell::Number(n) => RawValue::Number(n),
            Cell::Null => RawValue::Null,
        })
        .collect();

    let first = classify(&values, column.name.as_deref());
    let second = classify(&values, column.name.as_deref());
    assert_eq!(first, second);
});
