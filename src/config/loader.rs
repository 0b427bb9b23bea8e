//! Settings file discovery and loading.
//!
//! Priority (later overrides earlier):
//! 1. Built-in defaults
//! 2. `.cronlint.yml` in the working directory, or the file named by `--config`
//! 3. Command-line flags and environment variables

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::error::{CronlintError, Result};

/// File name looked for in the working directory.
pub const SETTINGS_FILE_NAME: &str = ".cronlint.yml";

/// Find `.cronlint.yml` in `dir`.
pub fn discover_settings(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(SETTINGS_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load settings from a YAML file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CronlintError::SettingsNotFound {
            path: path.to_path_buf(),
        },
        _ => CronlintError::Io(e),
    })?;

    let parse_error = |e: serde_yaml::Error| CronlintError::SettingsParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    // An empty or comment-only document is null, not an empty map.
    let value: serde_yaml::Value = serde_yaml::from_str(&contents).map_err(parse_error)?;
    if value.is_null() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_value(value).map_err(parse_error)?;
    settings
        .check()
        .map_err(|message| CronlintError::SettingsParseError {
            path: path.to_path_buf(),
            message,
        })?;
    Ok(settings)
}

/// Resolve the settings for a run.
///
/// An explicit path must exist. Without one, `.cronlint.yml` in `cwd` is
/// used if present, else the defaults.
pub fn resolve_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_settings(cwd),
    };

    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading settings");
            load_settings(&path)
        }
        None => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_settings_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE_NAME), "strict: true\n").unwrap();

        assert_eq!(
            discover_settings(temp.path()),
            Some(temp.path().join(SETTINGS_FILE_NAME))
        );
    }

    #[test]
    fn discover_returns_none_without_file() {
        let temp = TempDir::new().unwrap();
        assert!(discover_settings(temp.path()).is_none());
    }

    #[test]
    fn load_parses_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::write(&path, "check_scripts: true\nformat: sarif\n").unwrap();

        let settings = load_settings(&path).unwrap();

        assert!(settings.check_scripts);
        assert_eq!(settings.format, crate::lint::OutputFormat::Sarif);
    }

    #[test]
    fn load_empty_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::write(&path, "\n# nothing here\n").unwrap();
        assert_eq!(load_settings(&path).unwrap(), Settings::default());

        fs::write(&path, "").unwrap();
        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn load_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::write(&path, "strict: [not, a, bool]\n").unwrap();

        let err = load_settings(&path).unwrap_err();

        assert!(matches!(err, CronlintError::SettingsParseError { .. }));
        assert!(err.to_string().contains("settings.yml"));
    }

    #[test]
    fn load_rejects_disabling_syntax_rule() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        fs::write(&path, "disabled_rules: [cron-syntax]\n").unwrap();

        let err = load_settings(&path).unwrap_err();

        assert!(matches!(err, CronlintError::SettingsParseError { .. }));
        assert!(err.to_string().contains("cannot be disabled"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_settings(&temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, CronlintError::SettingsNotFound { .. }));
    }

    #[test]
    fn resolve_prefers_explicit_path() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE_NAME), "strict: true\n").unwrap();
        let explicit = temp.path().join("other.yml");
        fs::write(&explicit, "check_scripts: true\n").unwrap();

        let settings = resolve_settings(Some(&explicit), temp.path()).unwrap();

        assert!(settings.check_scripts);
        assert!(!settings.strict);
    }

    #[test]
    fn resolve_falls_back_to_discovered_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILE_NAME), "strict: true\n").unwrap();

        let settings = resolve_settings(None, temp.path()).unwrap();

        assert!(settings.strict);
    }

    #[test]
    fn resolve_defaults_without_any_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_settings(None, temp.path()).unwrap(),
            Settings::default()
        );
    }
}
