//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use crate::lint::OutputFormat;

/// cronlint - Validate crontab files before they are installed.
#[derive(Debug, Parser)]
#[command(name = "cronlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ./.cronlint.yml)
    #[arg(short, long, global = true, env = "CRONLINT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a crontab file
    Validate(ValidateArgs),

    /// List the built-in rules
    Rules,

    /// Print the JSON Schema of the settings file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    /// Crontab file to validate
    pub path: PathBuf,

    /// Also check that each entry's command exists
    #[arg(long, env = "CRONLINT_CHECK_SCRIPTS", value_parser = BoolishValueParser::new())]
    pub check_scripts: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, env = "CRONLINT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Accept NAME=value environment lines
    #[arg(long)]
    pub allow_environment: bool,
}

impl ValidateArgs {
    /// Settings given on the command line.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            check_scripts: self.check_scripts,
            strict: self.strict,
            allow_environment: self.allow_environment,
            format: self.format,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
