//! Reading whole crontab files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CronlintError, Result};

use super::line::CrontabLine;
use super::validator::LineValidator;

/// A crontab file after every line has been validated.
#[derive(Debug, Clone)]
pub struct CrontabFile {
    path: PathBuf,
    base_dir: PathBuf,
    lines: Vec<CrontabLine>,
}

impl CrontabFile {
    /// Read and validate the file at `path`.
    ///
    /// Only failing to read the file is an error; invalid lines are
    /// recorded on the returned lines.
    pub fn load(path: &Path, validator: &LineValidator) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CronlintError::CrontabNotFound {
                path: path.to_path_buf(),
            },
            ErrorKind::PermissionDenied => CronlintError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => CronlintError::CrontabRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded crontab");
        Ok(Self::parse(path, &contents, validator))
    }

    /// Validate crontab text that was read elsewhere.
    pub fn parse(path: impl Into<PathBuf>, contents: &str, validator: &LineValidator) -> Self {
        let path = path.into();
        let base_dir = crontab_dir(&path);
        let lines = contents
            .lines()
            .enumerate()
            .map(|(i, raw)| validator.validate(i + 1, raw))
            .collect();

        Self {
            path,
            base_dir,
            lines,
        }
    }

    /// Path the crontab was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory containing the crontab; relative command paths
    /// resolve against it.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Every line, in file order.
    pub fn lines(&self) -> &[CrontabLine] {
        &self.lines
    }

    /// Schedule entries, valid or not.
    pub fn entries(&self) -> impl Iterator<Item = &CrontabLine> {
        self.lines.iter().filter(|l| l.is_entry())
    }

    /// Entries whose syntax is valid.
    pub fn valid_entries(&self) -> impl Iterator<Item = &CrontabLine> {
        self.entries().filter(|l| l.is_valid())
    }

    /// Entries with a syntax error.
    pub fn invalid_lines(&self) -> impl Iterator<Item = &CrontabLine> {
        self.lines.iter().filter(|l| !l.is_valid())
    }

    /// Number of schedule entries.
    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }
}

fn crontab_dir(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    absolute
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"))
}
