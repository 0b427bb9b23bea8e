//! Command existence validation.
//!
//! Only registered when script checking is enabled, since it touches the
//! filesystem of the machine running the check.

use crate::crontab::CrontabFile;
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, Span};
use crate::scripts::CommandChecker;

/// Reports entries whose command cannot be found.
pub struct CommandExistsRule {
    checker: CommandChecker,
}

impl CommandExistsRule {
    /// Create the rule with the checker used to resolve commands.
    pub fn new(checker: CommandChecker) -> Self {
        Self { checker }
    }
}

impl LintRule for CommandExistsRule {
    fn id(&self) -> RuleId {
        RuleId::new("command-exists")
    }

    fn name(&self) -> &str {
        "Command Exists"
    }

    fn description(&self) -> &str {
        "Checks that each entry's script exists or its command is on PATH"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, crontab: &CrontabFile) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for line in crontab.valid_entries() {
            let Some(command) = line.command.as_deref() else {
                continue;
            };
            let check = self.checker.check(command);
            if check.exists() {
                continue;
            }

            let column = line.command_column.unwrap_or(1);
            diagnostics.push(
                LintDiagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!(
                        "script or command '{}' does not exist: {}",
                        check.token,
                        check.reason().unwrap_or("not found")
                    ),
                )
                .with_span(Span::at(crontab.path(), line.number, column)),
            );
        }

        diagnostics
    }
}
