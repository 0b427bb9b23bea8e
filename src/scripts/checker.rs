//! Command existence checks.
//!
//! [`CommandChecker`] decides whether the program a crontab entry runs can
//! actually be found. The first word of the command is treated as
//!
//! 1. a path, if it contains `/` (relative paths resolve against the
//!    crontab's directory), or
//! 2. a bare name, looked up first in the crontab's directory and then on
//!    the search path.

use std::path::{Path, PathBuf};

use super::search_path::{normalize, resolve_on_path, system_path};

/// Where a command was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// An explicit path, or a file next to the crontab.
    Filesystem,
    /// A directory on the search path.
    SearchPath,
}

/// Outcome of checking a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Found { path: PathBuf, from: ResolvedFrom },
    Missing { reason: String },
}

/// Result of [`CommandChecker::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCheck {
    /// First word of the command.
    pub token: String,
    /// Path the token was resolved to before checking, when it names a path.
    pub candidate: Option<PathBuf>,
    pub status: CommandStatus,
}

impl CommandCheck {
    /// Whether the command can be found.
    pub fn exists(&self) -> bool {
        matches!(self.status, CommandStatus::Found { .. })
    }

    /// Where the command was found.
    pub fn resolved_path(&self) -> Option<&Path> {
        match &self.status {
            CommandStatus::Found { path, .. } => Some(path),
            CommandStatus::Missing { .. } => None,
        }
    }

    /// Why the command could not be found.
    pub fn reason(&self) -> Option<&str> {
        match &self.status {
            CommandStatus::Found { .. } => None,
            CommandStatus::Missing { reason } => Some(reason),
        }
    }

    /// Whether the token is already an absolute path.
    pub fn is_absolute(&self) -> bool {
        Path::new(&self.token).is_absolute()
    }
}

/// Resolves crontab commands against the filesystem and search path.
#[derive(Debug, Clone)]
pub struct CommandChecker {
    base_dir: PathBuf,
    search_path: Vec<PathBuf>,
}

impl CommandChecker {
    /// Create a checker with an explicit search path.
    pub fn new(base_dir: impl Into<PathBuf>, search_path: Vec<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            search_path,
        }
    }

    /// Create a checker using `PATH`, followed by `extra` directories.
    pub fn from_env(base_dir: impl Into<PathBuf>, extra: &[PathBuf]) -> Self {
        let mut search_path = system_path();
        search_path.extend(extra.iter().cloned());
        Self::new(base_dir, search_path)
    }

    /// Directory relative paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directories searched for bare command names.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Check the first word of `command`.
    pub fn check(&self, command: &str) -> CommandCheck {
        let Some(token) = command.split_whitespace().next() else {
            return CommandCheck {
                token: String::new(),
                candidate: None,
                status: CommandStatus::Missing {
                    reason: "empty command".to_string(),
                },
            };
        };

        let check = if token.contains('/') {
            self.check_path(token)
        } else {
            self.check_name(token)
        };

        tracing::debug!(
            token = %check.token,
            found = check.exists(),
            "Checked crontab command"
        );
        check
    }

    fn check_path(&self, token: &str) -> CommandCheck {
        let path = Path::new(token);
        let candidate = if path.is_absolute() {
            path.to_path_buf()
        } else {
            normalize(&self.base_dir.join(path))
        };

        let status = if candidate.exists() {
            CommandStatus::Found {
                path: candidate.clone(),
                from: ResolvedFrom::Filesystem,
            }
        } else {
            CommandStatus::Missing {
                reason: format!("not found at {}", candidate.display()),
            }
        };

        CommandCheck {
            token: token.to_string(),
            candidate: Some(candidate),
            status,
        }
    }

    fn check_name(&self, token: &str) -> CommandCheck {
        let local = self.base_dir.join(token);
        let status = if local.is_file() {
            CommandStatus::Found {
                path: local.clone(),
                from: ResolvedFrom::Filesystem,
            }
        } else if let Some(path) = resolve_on_path(token, &self.search_path) {
            CommandStatus::Found {
                path,
                from: ResolvedFrom::SearchPath,
            }
        } else {
            CommandStatus::Missing {
                reason: format!(
                    "not found in {} or on PATH",
                    self.base_dir.display()
                ),
            }
        };

        CommandCheck {
            token: token.to_string(),
            candidate: Some(local),
            status,
        }
    }
}
