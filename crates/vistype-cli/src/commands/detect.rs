//! Detect command - report the semantic type of every column in a file.

use std::path::PathBuf;

use colored::Colorize;
use vistype::{ClassifierConfig, Dataset, FieldTypeClassifier, SemanticType};

pub fn run(
    file: PathBuf,
    json_output: bool,
    sample_size: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let classifier = FieldTypeClassifier::with_config(ClassifierConfig {
        sample_size,
        ..ClassifierConfig::default()
    })?;

    let dataset = Dataset::from_path(&file)?;
    let fields = classifier.detect_fields(&dataset);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Detected fields in".cyan().bold(),
        file.display().to_string().white()
    );
    if verbose {
        println!(
            "{} rows, sampling up to {} values per column",
            dataset.row_count(),
            sample_size
        );
    }
    println!();

    if fields.is_empty() {
        println!("{}", "No rows found - nothing to detect.".yellow());
        return Ok(());
    }

    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0).max(5);
    println!(
        "  {:width$}  {:12}  {}",
        "Field".bold(),
        "Type".bold(),
        "Unique".bold(),
        width = width
    );
    for field in &fields {
        println!(
            "  {:width$}  {:12}  {}",
            field.name,
            colorize(field.field_type),
            field.unique_count,
            width = width
        );
    }

    Ok(())
}

/// Color a semantic type label for terminal output.
pub fn colorize(semantic_type: SemanticType) -> colored::ColoredString {
    let label = semantic_type.as_str();
    match semantic_type {
        SemanticType::Quantitative => label.green(),
        SemanticType::Nominal => label.blue(),
        SemanticType::Ordinal => label.magenta(),
        SemanticType::Temporal => label.yellow(),
    }
}
