//! Classify command - classify values passed as arguments.

use colored::Colorize;
use vistype::{explain, RawValue};

use super::detect::colorize;

pub fn run(
    name: Option<String>,
    show_check: bool,
    values: Vec<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let values: Vec<RawValue> = values.into_iter().map(RawValue::Text).collect();

    if verbose {
        let present = values.iter().filter(|v| !v.is_absent()).count();
        println!(
            "{} {} values ({} present)",
            "Classifying".cyan().bold(),
            values.len(),
            present
        );
    }

    let result = explain(&values, name.as_deref());

    if show_check {
        println!(
            "{} (decided by {:?})",
            colorize(result.semantic_type),
            result.check
        );
    } else {
        println!("{}", colorize(result.semantic_type));
    }

    Ok(())
}
