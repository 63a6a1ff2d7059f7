//! Example: Detect semantic field types in a JSON records file.
//!
//! Usage:
//!   cargo run --example detect -- <file_path>
//!
//! Example:
//!   cargo run --example detect -- orders.json

use std::env;
use std::path::Path;

use vistype::{explain, Dataset};

fn main() -> vistype::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example detect -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example detect -- orders.json");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Field detection: {}", file_path);
    println!("{}", separator);
    println!();

    let dataset = Dataset::from_path(path)?;
    println!("## Dataset");
    println!("  Rows: {}", dataset.row_count());
    println!("  Columns: {}", dataset.column_names().len());
    println!();

    println!("## Fields");
    println!();
    for field in vistype::detect_fields(&dataset) {
        let decided = explain(dataset.column_values(&field.name), Some(field.name.as_str()));
        println!(
            "  {:20} {:13} unique={:<6} check={:?}",
            field.name,
            field.field_type.as_str(),
            field.unique_count,
            decided.check
        );
    }

    Ok(())
}
