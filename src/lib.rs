//! cronlint - Validate crontab files before they are installed.
//!
//! cronlint checks every line of a crontab file against the five-field cron
//! grammar (and the `@reboot`/`@daily`-style shortcuts), optionally checks
//! that each job's command exists, and reports the problems it finds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading and schema
//! - [`crontab`] - Crontab line grammar and file parsing
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, diagnostics and report formatters
//! - [`scripts`] - Command existence checks
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cronlint::crontab::LineValidator;
//!
//! let validator = LineValidator::default();
//! let line = validator.validate(1, "0 25 * * * /usr/bin/backup");
//! assert!(!line.is_valid());
//! assert_eq!(
//!     line.error_message().unwrap(),
//!     "hour out of range: 25 is not within 0-23"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod crontab;
pub mod error;
pub mod lint;
pub mod scripts;
pub mod ui;

pub use error::{CronlintError, Result};
