//! Raw values, row records and dataset loading.

mod parser;
mod source;
mod value;

pub use parser::{Parser, ParserConfig, DEFAULT_MAX_ROWS};
pub use source::{Dataset, Row};
pub(crate) use source::count_distinct;
pub use value::{DistinctKey, RawValue};
