//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vistype: semantic field type detection for chart encodings
#[derive(Parser)]
#[command(name = "vistype")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the semantic type of every column in a JSON records file
    Detect {
        /// Path to a JSON array of flat records
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output descriptors as JSON
        #[arg(long)]
        json: bool,

        /// Leading non-absent values examined per column
        #[arg(long, default_value_t = vistype::inference::DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,
    },

    /// Classify values given on the command line
    Classify {
        /// Column name used for identifier detection
        #[arg(short, long)]
        name: Option<String>,

        /// Also print the check that decided the type
        #[arg(long)]
        explain: bool,

        /// Column values; pass "" for an absent value
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,
    },
}
