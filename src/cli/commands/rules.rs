//! Rules command implementation.
//!
//! The `cronlint rules` command lists every built-in rule with its default
//! severity, for use in `disabled_rules`.

use crate::error::Result;
use crate::lint::{LintRule, RuleRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
#[derive(Debug, Default)]
pub struct RulesCommand;

impl RulesCommand {
    /// Create a new rules command.
    pub fn new() -> Self {
        Self
    }

    fn format_rule(rule: &dyn LintRule) -> String {
        format!(
            "{:<24} {:<8} {}",
            rule.id().to_string(),
            rule.default_severity().to_string(),
            rule.description()
        )
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = RuleRegistry::catalog();
        for rule in registry.iter() {
            ui.message(&Self::format_rule(rule));
        }
        Ok(CommandResult::success())
    }
}
