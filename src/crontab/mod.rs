//! Crontab parsing and syntax validation.
//!
//! A crontab is read line by line. Blank lines and `#` comments are
//! skipped; every other line must be five schedule fields followed by a
//! command, or an `@special` schedule followed by a command.
//!
//! # Example
//!
//! ```
//! use cronlint::crontab::LineValidator;
//!
//! let validator = LineValidator::default();
//!
//! let line = validator.validate(1, "0 5 * * 1 /usr/bin/backup.sh");
//! assert!(line.is_valid());
//!
//! let line = validator.validate(2, "60 5 * * 1 /usr/bin/backup.sh");
//! assert!(line.error_message().unwrap().contains("minute out of range"));
//! ```

pub mod field;
pub mod file;
pub mod line;
pub mod validator;

pub use field::{FieldError, FieldKind, FieldSpec};
pub use file::CrontabFile;
pub use line::{CrontabLine, LineError, LineKind, Schedule, SpecialSchedule};
pub use validator::{LineValidator, ValidatorOptions};
