//! Lint output formatters.
//!
//! This module provides formatters for writing a [`LintReport`] in
//! different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::LintReport;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output format for lint results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl OutputFormat {
    /// Name as written in flags and settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Sarif => "sarif",
        }
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
