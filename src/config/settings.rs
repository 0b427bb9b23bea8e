//! Settings schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::crontab::ValidatorOptions;
use crate::lint::{CronSyntaxRule, OutputFormat};

/// Rules that `disabled_rules` may not name.
pub const REQUIRED_RULES: &[&str] = &[CronSyntaxRule::ID];

/// Settings for a validation run.
///
/// Read from `.cronlint.yml`; every key is optional.
///
/// ```yaml
/// check_scripts: true
/// strict: false
/// allow_environment: true
/// format: human
/// disabled_rules: [absolute-command-path]
/// search_path: [/opt/jobs/bin]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Check that each entry's command exists.
    pub check_scripts: bool,

    /// Fail on warnings as well as errors.
    pub strict: bool,

    /// Accept `NAME=value` environment lines.
    pub allow_environment: bool,

    /// Report format.
    pub format: OutputFormat,

    /// Rule IDs to skip.
    pub disabled_rules: Vec<String>,

    /// Extra directories searched for bare command names, after `PATH`.
    pub search_path: Vec<PathBuf>,
}

impl Settings {
    /// Check constraints the YAML types cannot express.
    pub fn check(&self) -> std::result::Result<(), String> {
        match self
            .disabled_rules
            .iter()
            .find(|id| REQUIRED_RULES.contains(&id.as_str()))
        {
            Some(id) => Err(format!("disabled_rules: rule '{}' cannot be disabled", id)),
            None => Ok(()),
        }
    }

    /// Options for the line validator.
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            allow_environment: self.allow_environment,
        }
    }
}

/// Values given on the command line or through the environment.
///
/// Boolean flags can only switch a setting on; `None` leaves the file
/// setting in place.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub check_scripts: bool,
    pub strict: bool,
    pub allow_environment: bool,
    pub format: Option<OutputFormat>,
}

impl Settings {
    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Self {
        self.check_scripts |= overrides.check_scripts;
        self.strict |= overrides.strict;
        self.allow_environment |= overrides.allow_environment;
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let settings = Settings::default();
        assert!(!settings.check_scripts);
        assert!(!settings.strict);
        assert!(!settings.allow_environment);
        assert_eq!(settings.format, OutputFormat::Human);
        assert!(settings.disabled_rules.is_empty());
    }

    #[test]
    fn parses_all_keys() {
        let yaml = r#"
check_scripts: true
strict: true
allow_environment: true
format: json
disabled_rules: [absolute-command-path]
search_path: [/opt/jobs/bin]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();

        assert!(settings.check_scripts);
        assert!(settings.strict);
        assert!(settings.allow_environment);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.disabled_rules, vec!["absolute-command-path"]);
        assert_eq!(settings.search_path, vec![PathBuf::from("/opt/jobs/bin")]);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let settings: Settings = serde_yaml::from_str("strict: true").unwrap();
        assert!(settings.strict);
        assert!(!settings.check_scripts);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<Settings, _> = serde_yaml::from_str("colour: always");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_switch_flags_on() {
        let settings = Settings {
            strict: true,
            ..Default::default()
        }
        .with_overrides(&SettingsOverrides {
            check_scripts: true,
            ..Default::default()
        });

        assert!(settings.check_scripts);
        // Unset flags do not turn file settings off.
        assert!(settings.strict);
    }

    #[test]
    fn format_override_replaces_file_value() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Default::default()
        }
        .with_overrides(&SettingsOverrides {
            format: Some(OutputFormat::Sarif),
            ..Default::default()
        });
        assert_eq!(settings.format, OutputFormat::Sarif);
    }

    #[test]
    fn check_rejects_disabling_required_rule() {
        let settings = Settings {
            disabled_rules: vec!["command-exists".into(), "cron-syntax".into()],
            ..Default::default()
        };
        let err = settings.check().unwrap_err();
        assert!(err.contains("'cron-syntax' cannot be disabled"));
    }

    #[test]
    fn check_accepts_optional_rules() {
        let settings = Settings {
            disabled_rules: vec!["command-exists".into(), "absolute-command-path".into()],
            ..Default::default()
        };
        assert_eq!(settings.check(), Ok(()));
    }

    #[test]
    fn validator_options_follow_settings() {
        let settings = Settings {
            allow_environment: true,
            ..Default::default()
        };
        assert!(settings.validator_options().allow_environment);
    }
}
