//! Lint diagnostic messages.
//!
//! This module provides the [`LintDiagnostic`] type for representing
//! problems found in a crontab, with the location they were found at.

use super::rule::{RuleId, Severity};
use super::span::Span;

/// A diagnostic message produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional source location.
    pub span: Option<Span>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
    /// Extra context, such as the offending line.
    pub notes: Vec<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            span: None,
            suggestion: None,
            notes: vec![],
        }
    }

    /// Add a source span to this diagnostic.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Line number this diagnostic points at, if any.
    pub fn line(&self) -> Option<usize> {
        self.span.as_ref().map(|s| s.line)
    }
}

/// Sort diagnostics into file order, errors before warnings on the same line.
pub fn sort_diagnostics(diagnostics: &mut [LintDiagnostic]) {
    diagnostics.sort_by(|a, b| {
        a.line()
            .cmp(&b.line())
            .then(b.severity.cmp(&a.severity))
            .then(a.rule_id.0.cmp(&b.rule_id.0))
    });
}
