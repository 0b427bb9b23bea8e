//! Validate command implementation.
//!
//! The `cronlint validate` command checks a crontab file line by line and
//! reports every invalid entry.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{resolve_settings, Settings};
use crate::crontab::{CrontabFile, LineValidator};
use crate::error::Result;
use crate::lint::{
    HumanFormatter, JsonFormatter, LintFormatter, LintReport, OutputFormat, RuleId,
    RuleRegistry, SarifFormatter,
};
use crate::scripts::CommandChecker;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for a crontab with invalid lines.
pub const EXIT_INVALID: i32 = 1;

/// Exit code when the crontab or the settings file cannot be used.
pub const EXIT_INPUT: i32 = 2;

/// The validate command implementation.
pub struct ValidateCommand {
    working_dir: PathBuf,
    config: Option<PathBuf>,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(working_dir: &Path, config: Option<PathBuf>, args: ValidateArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            config,
            args,
        }
    }

    fn build_registry(
        &self,
        settings: &Settings,
        crontab: &CrontabFile,
        ui: &mut dyn UserInterface,
    ) -> RuleRegistry {
        let mut registry = RuleRegistry::with_builtins();
        if settings.check_scripts {
            let checker = CommandChecker::from_env(crontab.base_dir(), &settings.search_path);
            registry = registry.with_script_checks(checker);
        }

        let known = RuleRegistry::catalog();
        for id in &settings.disabled_rules {
            let id = RuleId::new(id.as_str());
            if known.get(&id).is_none() {
                ui.warning(&format!("Unknown rule '{}' in disabled_rules", id));
            } else if !registry.disable(&id) {
                tracing::debug!(rule = %id, "Disabled rule is not active");
            }
        }

        registry
    }

    fn format_report(
        &self,
        format: OutputFormat,
        report: &LintReport,
        registry: &RuleRegistry,
        use_color: bool,
    ) -> Result<String> {
        let mut output = Vec::new();

        match format {
            OutputFormat::Human => HumanFormatter::new(use_color).format(report, &mut output)?,
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            OutputFormat::Sarif => {
                let descriptions = registry
                    .iter()
                    .map(|rule| (rule.id(), rule.description().to_string()));
                SarifFormatter::new("cronlint", env!("CARGO_PKG_VERSION"))
                    .with_rule_descriptions(descriptions)
                    .format(report, &mut output)?
            }
        }

        Ok(String::from_utf8_lossy(&output).trim_end().to_string())
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match resolve_settings(self.config.as_deref(), &self.working_dir) {
            Ok(settings) => settings.with_overrides(&self.args.overrides()),
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_INPUT));
            }
        };
        tracing::debug!(?settings, "Resolved settings");

        let validator = LineValidator::new(settings.validator_options());
        let crontab = match CrontabFile::load(&self.args.path, &validator) {
            Ok(crontab) => crontab,
            Err(e) if e.is_input_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_INPUT));
            }
            Err(e) => return Err(e),
        };

        let registry = self.build_registry(&settings, &crontab, ui);
        let report = LintReport::new(
            crontab.path(),
            crontab.entry_count(),
            registry.run(&crontab),
        );
        tracing::debug!(
            entries = report.entries(),
            diagnostics = report.diagnostics().len(),
            "Validation finished"
        );

        if report.is_clean() && settings.format == OutputFormat::Human {
            ui.success(&format!(
                "{} is valid ({} entries checked)",
                crontab.path().display(),
                report.entries()
            ));
        } else {
            let output = self.format_report(settings.format, &report, &registry, ui.use_color())?;
            for line in output.lines() {
                ui.message(line);
            }
        }

        if report.fails(settings.strict) {
            Ok(CommandResult::failure(EXIT_INVALID))
        } else {
            Ok(CommandResult::success())
        }
    }
}
