//! Mealprep CLI - stepwise meal construction
//!
//! Entry point for the mealprep command-line application.

use anyhow::Result;
use clap::Parser;

use mealprep::cli::output::display_error;
use mealprep::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output_config = cli.output_config();

    // Initialize tracing subscriber; RUST_LOG overrides the flag-derived level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(output_config.log_directive())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
