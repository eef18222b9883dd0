//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::settings::Settings;
use crate::infra::dirs::MealprepDirs;
use commands::Commands;
use output::OutputConfig;

/// Mealprep - stepwise meal construction
///
/// Assemble meals with builders driven by a director.
#[derive(Parser, Debug)]
#[command(name = "mealprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, global = true, env = "MEALPREP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output configuration from the global flags alone
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Load and install the process-wide settings
    pub fn load_settings(&self) -> Result<&'static Settings> {
        let settings = match &self.config {
            Some(path) => Settings::load_from_path(path),
            None => Settings::load(&MealprepDirs::new()),
        }
        .context("Failed to load settings")?;

        Ok(settings.install()?)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(cmd) = self.command.as_ref() else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let settings = self.load_settings()?;
        let mut output = self.output_config();
        output.json = output.json || settings.json_output();

        cmd.run(settings, &output)
    }
}
