//! Schedule syntax validation.
//!
//! Reports every line the [`LineValidator`](crate::crontab::LineValidator)
//! rejected.

use crate::crontab::{CrontabFile, FieldError, LineError, SpecialSchedule};
use crate::lint::{LintDiagnostic, LintRule, RuleId, Severity, Span};

/// Reports crontab lines with invalid schedule syntax.
pub struct CronSyntaxRule;

impl CronSyntaxRule {
    /// Rule ID. This rule decides line validity and cannot be disabled.
    pub const ID: &'static str = "cron-syntax";

    fn suggestion(error: &LineError) -> Option<String> {
        match error {
            LineError::Malformed { .. } => Some(
                "expected: <minute> <hour> <day-of-month> <month> <day-of-week> <command>"
                    .to_string(),
            ),
            LineError::UnknownSpecial { .. } => {
                let known: Vec<_> = SpecialSchedule::ALL.iter().map(|s| s.to_string()).collect();
                Some(format!("known schedules: {}", known.join(", ")))
            }
            LineError::MissingCommand { .. } => {
                Some("add the command to run after the schedule".to_string())
            }
            LineError::Field { error, .. } => match error {
                FieldError::OutOfRange { min, max, .. } => {
                    Some(format!("use a value from {} to {}", min, max))
                }
                FieldError::ReversedRange { start, end, .. } => {
                    Some(format!("write the range as {}-{}", end, start))
                }
                _ => None,
            },
        }
    }
}

impl LintRule for CronSyntaxRule {
    fn id(&self) -> RuleId {
        RuleId::new(Self::ID)
    }

    fn name(&self) -> &str {
        "Cron Syntax"
    }

    fn description(&self) -> &str {
        "Validates schedule fields, special schedules and line structure"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, crontab: &CrontabFile) -> Vec<LintDiagnostic> {
        crontab
            .lines()
            .iter()
            .filter_map(|line| {
                let error = line.error.as_ref()?;
                let mut diag =
                    LintDiagnostic::new(self.id(), self.default_severity(), error.to_string())
                        .with_span(Span::at(crontab.path(), line.number, error.column()))
                        .with_note(line.raw.trim_end());
                if let Some(suggestion) = Self::suggestion(error) {
                    diag = diag.with_suggestion(suggestion);
                }
                Some(diag)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crontab::LineValidator;

    fn check(contents: &str) -> Vec<LintDiagnostic> {
        let crontab = CrontabFile::parse("crontab", contents, &LineValidator::default());
        CronSyntaxRule.check(&crontab)
    }

    #[test]
    fn valid_crontab_has_no_diagnostics() {
        let diagnostics = check("# jobs\n\n0 5 * * 1 /usr/bin/backup.sh\n@daily /bin/true\n");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn reports_out_of_range_minute() {
        let diagnostics = check("0 5 * * 1 /bin/true\n60 5 * * 1 /usr/bin/backup.sh\n");

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!(diag.severity, Severity::Error);
        assert!(diag.message.contains("minute out of range"));
        assert_eq!(diag.span, Some(Span::at("crontab", 2, 1)));
        assert_eq!(diag.suggestion.as_deref(), Some("use a value from 0 to 59"));
        assert_eq!(diag.notes, vec!["60 5 * * 1 /usr/bin/backup.sh".to_string()]);
    }

    #[test]
    fn reports_each_invalid_line() {
        let diagnostics = check("bad line\n* 24 * * * x\n@often y\n");
        let lines: Vec<_> = diagnostics.iter().filter_map(|d| d.line()).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn suggests_known_specials() {
        let diagnostics = check("@often /bin/true\n");
        assert!(diagnostics[0]
            .suggestion
            .as_ref()
            .unwrap()
            .contains("@daily"));
    }

    #[test]
    fn suggests_field_layout_for_malformed_lines() {
        let diagnostics = check("0 5 * *\n");
        assert!(diagnostics[0].message.contains("malformed line"));
        assert!(diagnostics[0]
            .suggestion
            .as_ref()
            .unwrap()
            .contains("<day-of-week> <command>"));
    }
}
