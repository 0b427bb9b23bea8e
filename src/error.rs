//! Error types for cronlint operations.
//!
//! This module defines [`CronlintError`], the error type for failures that
//! stop a run, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems inside a crontab are never errors here; they are collected as
//!   lint diagnostics (see [`crate::lint`])
//! - `CronlintError` covers the fatal cases: unreadable input, bad settings
//! - Use `anyhow::Error` (via `CronlintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cronlint operations.
#[derive(Debug, Error)]
pub enum CronlintError {
    /// Crontab file does not exist.
    #[error("Crontab not found: {path}")]
    CrontabNotFound { path: PathBuf },

    /// Crontab file exists but may not be read.
    #[error("Permission denied reading {path}")]
    PermissionDenied { path: PathBuf },

    /// Crontab file could not be read for another reason.
    #[error("Failed to read {path}: {source}")]
    CrontabRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file given explicitly does not exist.
    #[error("Settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CronlintError {
    /// Whether this error means the crontab itself could not be loaded.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::CrontabNotFound { .. } | Self::PermissionDenied { .. } | Self::CrontabRead { .. }
        )
    }
}

/// Result type alias for cronlint operations.
pub type Result<T> = std::result::Result<T, CronlintError>;
