//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
    config: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher.
    ///
    /// `working_dir` is where `.cronlint.yml` is looked up when no explicit
    /// settings file is given.
    pub fn new(working_dir: PathBuf, config: Option<PathBuf>) -> Self {
        Self {
            working_dir,
            config,
        }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Validate(args) => {
                let cmd = super::validate::ValidateCommand::new(
                    &self.working_dir,
                    self.config.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Rules => super::rules::RulesCommand::new().execute(ui),
            Commands::Schema => super::schema::SchemaCommand::new().execute(ui),
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_validate() {
        let temp = TempDir::new().unwrap();
        let crontab = temp.path().join("crontab");
        fs::write(&crontab, "0 * * * * /bin/true\n").unwrap();

        let cli = Cli::try_parse_from(["cronlint", "validate", crontab.to_str().unwrap()]).unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("is valid"));
    }

    #[test]
    fn dispatches_rules() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["cronlint", "rules"]).unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("cron-syntax"));
    }

    #[test]
    fn working_dir_is_kept() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/srv"), None);
        assert_eq!(dispatcher.working_dir(), Path::new("/srv"));
    }
}
