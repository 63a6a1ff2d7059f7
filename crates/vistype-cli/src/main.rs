//! vistype CLI - semantic field type detection.

mod cli;
mod commands;

use std::env;
use std::sync::OnceLock;

use clap::Parser;
use cli::{Cli, Commands};
use log::LevelFilter;

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging(verbose: bool) {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            builder.filter_module("vistype", level);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Detect {
            file,
            json,
            sample_size,
        } => commands::detect::run(file, json, sample_size, cli.verbose),

        Commands::Classify {
            name,
            explain,
            values,
        } => commands::classify::run(name, explain, values, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
