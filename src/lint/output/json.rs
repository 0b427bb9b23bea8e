//! JSON output formatter.
//!
//! Formats lint diagnostics as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::{LintReport, Severity};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    file: String,
    diagnostics: Vec<JsonDiagnostic>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    severity: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    entries: usize,
    total: usize,
    errors: usize,
    warnings: usize,
    valid: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let diagnostics = report
            .diagnostics()
            .iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.0.clone(),
                severity: d.severity.to_string(),
                message: d.message.clone(),
                line: d.span.as_ref().map(|s| s.line),
                column: d.span.as_ref().map(|s| s.column),
                suggestion: d.suggestion.clone(),
                notes: d.notes.clone(),
            })
            .collect();

        let errors = report.count(Severity::Error);
        let output = JsonOutput {
            file: report.file().display().to_string(),
            diagnostics,
            summary: JsonSummary {
                entries: report.entries(),
                total: report.diagnostics().len(),
                errors,
                warnings: report.count(Severity::Warning),
                valid: errors == 0,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
