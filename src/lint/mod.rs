//! Crontab linting.
//!
//! Problems found in a crontab are reported through a pluggable
//! rule-based system rather than as errors, so a single run can report
//! every bad line.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - The rules enabled for a run ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity and suggestions ([`LintDiagnostic`])
//! - **Formatters** - Human, JSON and SARIF renderings of a [`LintReport`]
//!
//! # Example
//!
//! ```
//! use cronlint::crontab::{CrontabFile, LineValidator};
//! use cronlint::lint::{RuleRegistry, Severity};
//!
//! let crontab = CrontabFile::parse(
//!     "crontab",
//!     "0 5 * * 1 /usr/bin/backup.sh\n0 24 * * * /usr/bin/report\n",
//!     &LineValidator::default(),
//! );
//!
//! let diagnostics = RuleRegistry::with_builtins().run(&crontab);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Error);
//! assert_eq!(diagnostics[0].line(), Some(2));
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod span;

pub use diagnostic::{sort_diagnostics, LintDiagnostic};
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use report::LintReport;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{AbsoluteCommandPathRule, CommandExistsRule, CronSyntaxRule};
pub use span::Span;
