//! Schema command implementation.
//!
//! The `cronlint schema` command prints the JSON Schema of `.cronlint.yml`.

use crate::config::SchemaGenerator;
use crate::error::{CronlintError, Result};
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new(&RuleRegistry::catalog()).generate();
        let output =
            serde_json::to_string_pretty(&schema).map_err(|e| CronlintError::Other(e.into()))?;
        ui.message(&output);
        Ok(CommandResult::success())
    }
}
