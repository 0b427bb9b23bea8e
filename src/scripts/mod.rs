//! Checks that crontab commands refer to something that exists.

pub mod checker;
pub mod search_path;

pub use checker::{CommandCheck, CommandChecker, CommandStatus, ResolvedFrom};
pub use search_path::{is_executable, normalize, resolve_on_path, system_path};
