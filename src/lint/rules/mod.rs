//! Built-in lint rules.

pub mod absolute_command_path;
pub mod command_exists;
pub mod cron_syntax;

pub use absolute_command_path::AbsoluteCommandPathRule;
pub use command_exists::CommandExistsRule;
pub use cron_syntax::CronSyntaxRule;
