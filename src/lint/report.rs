//! The result of linting one crontab.

use std::path::{Path, PathBuf};

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// Diagnostics for one file plus the counts the summary needs.
#[derive(Debug, Clone)]
pub struct LintReport {
    file: PathBuf,
    entries: usize,
    diagnostics: Vec<LintDiagnostic>,
}

impl LintReport {
    /// Create a report. `entries` is the number of schedule lines checked.
    pub fn new(file: impl Into<PathBuf>, entries: usize, diagnostics: Vec<LintDiagnostic>) -> Self {
        Self {
            file: file.into(),
            entries,
            diagnostics,
        }
    }

    /// The crontab that was checked.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Number of schedule entries checked.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// All diagnostics, in file order.
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Whether nothing was reported at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether the run should fail. Strict mode also fails on warnings.
    pub fn fails(&self, strict: bool) -> bool {
        self.count(Severity::Error) > 0 || (strict && self.count(Severity::Warning) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn report(severities: &[Severity]) -> LintReport {
        let diagnostics = severities
            .iter()
            .map(|s| LintDiagnostic::new(RuleId::new("r"), *s, "m"))
            .collect();
        LintReport::new("crontab", 5, diagnostics)
    }

    #[test]
    fn counts_by_severity() {
        let report = report(&[Severity::Error, Severity::Warning, Severity::Error]);
        assert_eq!(report.count(Severity::Error), 2);
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.entries(), 5);
    }

    #[test]
    fn errors_always_fail() {
        assert!(report(&[Severity::Error]).fails(false));
    }

    #[test]
    fn warnings_fail_only_in_strict_mode() {
        let report = report(&[Severity::Warning, Severity::Warning]);
        assert!(!report.fails(false));
        assert!(report.fails(true));
    }

    #[test]
    fn empty_report_is_clean() {
        let report = report(&[]);
        assert!(report.is_clean());
        assert!(!report.fails(true));
    }
}
