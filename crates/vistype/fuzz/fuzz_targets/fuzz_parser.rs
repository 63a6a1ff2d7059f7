//! Fuzz target for the JSON records parser.
//!
//! This fuzzer tests that record loading:
//! 1. Never panics on malformed input
//! 2. Rejects nested values instead of guessing
//! 3. Hands every loaded dataset to field detection without crashing

#![no_main]

use libfuzzer_sys::fuzz_target;
use vistype::{detect_fields, Parser};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(content) = std::str::from_utf8(data) {
        let parser = Parser::new();
        if let Ok(dataset) = parser.parse_str(content) {
            let fields = detect_fields(&dataset);
            assert_eq!(fields.len(), dataset.column_names().len());
        }
    }
});
