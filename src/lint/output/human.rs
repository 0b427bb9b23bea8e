//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.
//! Each diagnostic is one `file:line:column: severity[rule]: message` line,
//! followed by indented notes and help.

use console::Style;

use super::LintFormatter;
use crate::lint::{LintReport, Severity};
use crate::ui::CronlintTheme;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: CronlintTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            CronlintTheme::new()
        } else {
            CronlintTheme::plain()
        };
        Self { theme }
    }

    fn severity_style(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Warning => &self.theme.warning,
            Severity::Error => &self.theme.error,
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &LintReport, writer: &mut W) -> std::io::Result<()> {
        let dim = &self.theme.dim;

        for diag in report.diagnostics() {
            let label = self
                .severity_style(diag.severity)
                .apply_to(format!("{}[{}]", diag.severity, diag.rule_id));

            match diag.span {
                Some(ref span) => writeln!(writer, "{}: {}: {}", span, label, diag.message)?,
                None => writeln!(writer, "{}: {}", label, diag.message)?,
            }

            for note in &diag.notes {
                writeln!(writer, "   {} {}", dim.apply_to("= note:"), note)?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   {} {}", dim.apply_to("= help:"), suggestion)?;
            }
        }

        if report.is_clean() {
            return Ok(());
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "Checked {} entries: {} error(s), {} warning(s)",
            report.entries(),
            report.count(Severity::Error),
            report.count(Severity::Warning)
        )?;

        Ok(())
    }
}
