//! Absolute command path recommendation.
//!
//! Cron runs jobs with a minimal environment, so a command that works from
//! an interactive shell may not be found at run time. Recommends writing
//! the absolute path instead.

use crate::crontab::CrontabFile;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, Span};
use crate::scripts::CommandChecker;

/// Warns about commands that are not given as absolute paths.
pub struct AbsoluteCommandPathRule {
    checker: CommandChecker,
}

impl AbsoluteCommandPathRule {
    /// Create the rule with the checker used to resolve commands.
    pub fn new(checker: CommandChecker) -> Self {
        Self { checker }
    }
}

impl LintRule for AbsoluteCommandPathRule {
    fn id(&self) -> RuleId {
        RuleId::new("absolute-command-path")
    }

    fn name(&self) -> &str {
        "Absolute Command Path"
    }

    fn description(&self) -> &str {
        "Recommends absolute paths for commands to avoid ambiguity"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, crontab: &CrontabFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for line in crontab.valid_entries() {
            let Some(command) = line.command.as_deref() else {
                continue;
            };
            let check = self.checker.check(command);
            if check.token.is_empty() || check.is_absolute() {
                continue;
            }

            let mut diag = LintDiagnostic::new(
                self.id(),
                self.default_severity(),
                format!("command '{}' is not an absolute path", check.token),
            )
            .with_span(Span::at(
                crontab.path(),
                line.number,
                line.command_column.unwrap_or(1),
            ));

            // Prefer where the command was actually found; otherwise where a
            // relative path would have pointed.
            if let Some(path) = check.resolved_path().or(check.candidate.as_deref()) {
                diag = diag.with_suggestion(format!(
                    "replace '{}' with '{}'",
                    check.token,
                    path.display()
                ));
            }
            diagnostics.push(diag);
        }

        diagnostics
    }
}
