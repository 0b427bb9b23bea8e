//! Line-level crontab validation.
//!
//! [`LineValidator`] classifies a single line and, for schedule entries,
//! checks every field against its [`FieldSpec`](super::FieldSpec).

use std::sync::LazyLock;

use regex::Regex;

use super::field::FieldKind;
use super::line::{CrontabLine, LineError, LineKind, Schedule, SpecialSchedule};

static ENV_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.*)$").expect("valid environment regex")
});

/// Options that change which lines are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Treat `NAME=value` lines as environment settings instead of errors.
    pub allow_environment: bool,
}

/// Validates individual crontab lines.
#[derive(Debug, Clone, Default)]
pub struct LineValidator {
    options: ValidatorOptions,
}

impl LineValidator {
    /// Create a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Get the validator options.
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate one line. `number` is 1-based.
    pub fn validate(&self, number: usize, raw: &str) -> CrontabLine {
        let text = raw.trim();

        if text.is_empty() {
            return CrontabLine::skipped(number, raw, LineKind::Blank);
        }
        if text.starts_with('#') {
            return CrontabLine::skipped(number, raw, LineKind::Comment);
        }
        if self.options.allow_environment {
            if let Some(caps) = ENV_ASSIGNMENT.captures(text) {
                let kind = LineKind::Environment {
                    name: caps[1].to_string(),
                    value: caps[2].trim().to_string(),
                };
                return CrontabLine::skipped(number, raw, kind);
            }
        }

        // Columns are reported against the raw line, so account for the
        // leading whitespace that trim() removed.
        let indent = raw.len() - raw.trim_start().len();
        let tokens = tokenize(text);

        let line = match tokens.first() {
            Some(&(_, first)) if first.starts_with('@') => {
                validate_special(number, raw, text, &tokens)
            }
            _ => validate_fields(number, raw, text, &tokens),
        };

        let line = shift_columns(line, raw, indent);
        if let Some(ref err) = line.error {
            tracing::debug!(line = number, error = %err, "Invalid crontab entry");
        }
        line
    }
}

fn validate_special(
    number: usize,
    raw: &str,
    text: &str,
    tokens: &[(usize, &str)],
) -> CrontabLine {
    let keyword = &tokens[0].1[1..];

    let Some(special) = SpecialSchedule::from_keyword(keyword) else {
        return CrontabLine::invalid(
            number,
            raw,
            LineError::UnknownSpecial {
                keyword: keyword.to_string(),
            },
        );
    };

    let Some(&(offset, _)) = tokens.get(1) else {
        return CrontabLine::invalid(
            number,
            raw,
            LineError::MissingCommand {
                keyword: keyword.to_string(),
            },
        );
    };

    entry(number, raw, Schedule::Special(special), text, offset)
}

fn validate_fields(
    number: usize,
    raw: &str,
    text: &str,
    tokens: &[(usize, &str)],
) -> CrontabLine {
    if tokens.len() < 6 {
        return CrontabLine::invalid(
            number,
            raw,
            LineError::Malformed {
                tokens: tokens.len(),
            },
        );
    }

    for (kind, &(offset, expr)) in FieldKind::ALL.iter().zip(tokens) {
        if let Err(error) = kind.spec().validate(expr) {
            return CrontabLine::invalid(
                number,
                raw,
                LineError::Field {
                    error,
                    column: column_of(text, offset),
                },
            );
        }
    }

    let fields = [0, 1, 2, 3, 4].map(|i| tokens[i].1.to_string());
    entry(number, raw, Schedule::Fields(fields), text, tokens[5].0)
}

fn entry(
    number: usize,
    raw: &str,
    schedule: Schedule,
    text: &str,
    command_offset: usize,
) -> CrontabLine {
    CrontabLine {
        number,
        raw: raw.to_string(),
        kind: LineKind::Entry,
        schedule: Some(schedule),
        command: Some(text[command_offset..].to_string()),
        command_column: Some(column_of(text, command_offset)),
        error: None,
    }
}

/// Columns above were computed on the trimmed text.
fn shift_columns(mut line: CrontabLine, raw: &str, indent: usize) -> CrontabLine {
    if indent == 0 {
        return line;
    }
    let shift = raw[..indent].chars().count();
    if let Some(col) = line.command_column.as_mut() {
        *col += shift;
    }
    if let Some(LineError::Field { column, .. }) = line.error.as_mut() {
        *column += shift;
    }
    line
}

/// Split on whitespace, keeping each token's byte offset.
fn tokenize(text: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push((s, &text[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push((s, &text[s..]));
    }
    tokens
}

fn column_of(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crontab::field::FieldError;

    fn validate(line: &str) -> CrontabLine {
        LineValidator::default().validate(1, line)
    }

    #[test]
    fn accepts_simple_entry() {
        let line = validate("0 5 * * 1 /usr/bin/backup.sh");
        assert!(line.is_valid());
        assert!(line.is_entry());
        assert_eq!(line.command.as_deref(), Some("/usr/bin/backup.sh"));
        assert_eq!(line.command_column, Some(11));
        assert_eq!(
            line.schedule,
            Some(Schedule::Fields([
                "0".into(),
                "5".into(),
                "*".into(),
                "*".into(),
                "1".into()
            ]))
        );
    }

    #[test]
    fn rejects_minute_out_of_range() {
        let line = validate("60 5 * * 1 /usr/bin/backup.sh");
        assert!(!line.is_valid());
        let message = line.error_message().unwrap();
        assert!(message.contains("minute out of range"), "{message}");
    }

    #[test]
    fn every_in_range_value_makes_a_valid_line() {
        for (position, kind) in FieldKind::ALL.iter().enumerate() {
            let spec = kind.spec();
            for value in spec.min..=spec.max {
                let mut fields = ["*"; 5].map(String::from);
                fields[position] = value.to_string();
                let line = validate(&format!("{} /usr/bin/job", fields.join(" ")));
                assert!(line.is_valid(), "{kind}={value}: {:?}", line.error);
            }
        }
    }

    #[test]
    fn rejects_hour_out_of_range_with_column() {
        let line = validate("0 24 * * * /bin/true");
        match line.error {
            Some(LineError::Field {
                error: FieldError::OutOfRange { value, .. },
                column,
            }) => {
                assert_eq!(value, 24);
                assert_eq!(column, 3);
            }
            other => panic!("expected out-of-range error, got {:?}", other),
        }
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(validate("").kind, LineKind::Blank);
        assert_eq!(validate("   \t").kind, LineKind::Blank);
        assert_eq!(validate("# m h dom mon dow command").kind, LineKind::Comment);
        assert_eq!(validate("   # indented comment").kind, LineKind::Comment);
        assert!(validate("# 99 99 99 99 99").is_valid());
    }

    #[test]
    fn fewer_than_six_tokens_is_malformed() {
        let line = validate("0 5 * * 1");
        assert_eq!(line.error, Some(LineError::Malformed { tokens: 5 }));

        let line = validate("garbage");
        assert_eq!(line.error, Some(LineError::Malformed { tokens: 1 }));
    }

    #[test]
    fn preserves_command_whitespace() {
        let line = validate("*/5 * * * *   echo  'a  b' > /dev/null");
        assert_eq!(line.command.as_deref(), Some("echo  'a  b' > /dev/null"));
        assert_eq!(line.command_token(), Some("echo"));
    }

    #[test]
    fn accepts_complex_fields() {
        assert!(validate("*/15 9-17 * jan-mar mon-fri /opt/report").is_valid());
        assert!(validate("0,30 0-23/2 1,15 * 0 run").is_valid());
    }

    #[test]
    fn rejects_reversed_range_and_zero_step() {
        assert!(!validate("5-1 * * * * cmd").is_valid());
        assert!(!validate("*/0 * * * * cmd").is_valid());
    }

    #[test]
    fn accepts_special_schedules() {
        let line = validate("@daily /bin/true");
        assert!(line.is_valid());
        assert_eq!(line.schedule, Some(Schedule::Special(SpecialSchedule::Daily)));
        assert_eq!(line.command.as_deref(), Some("/bin/true"));

        assert!(validate("@reboot /usr/local/bin/start --now").is_valid());
    }

    #[test]
    fn rejects_unknown_special() {
        let line = validate("@often /bin/true");
        assert_eq!(
            line.error,
            Some(LineError::UnknownSpecial {
                keyword: "often".into()
            })
        );
    }

    #[test]
    fn rejects_special_without_command() {
        let line = validate("@hourly");
        assert_eq!(
            line.error,
            Some(LineError::MissingCommand {
                keyword: "hourly".into()
            })
        );
    }

    #[test]
    fn environment_lines_rejected_by_default() {
        let line = validate("MAILTO=root");
        assert_eq!(line.error, Some(LineError::Malformed { tokens: 1 }));
    }

    #[test]
    fn environment_lines_allowed_when_enabled() {
        let validator = LineValidator::new(ValidatorOptions {
            allow_environment: true,
        });
        let line = validator.validate(2, "SHELL = /bin/bash");
        assert!(line.is_valid());
        assert_eq!(
            line.kind,
            LineKind::Environment {
                name: "SHELL".into(),
                value: "/bin/bash".into()
            }
        );
        // Schedule lines are unaffected.
        assert!(validator.validate(3, "0 5 * * 1 /bin/true").is_entry());
    }

    #[test]
    fn columns_account_for_indentation() {
        let line = validate("  0 5 99 * * /bin/true");
        assert_eq!(line.error.as_ref().map(|e| e.column()), Some(7));

        let line = validate("  0 5 * * * /bin/true");
        assert_eq!(line.command_column, Some(13));
    }

    #[test]
    fn keeps_line_number_and_raw_text() {
        let line = LineValidator::default().validate(42, "0 0 * * * /bin/true\r");
        assert_eq!(line.number, 42);
        assert_eq!(line.raw, "0 0 * * * /bin/true\r");
        assert_eq!(line.command.as_deref(), Some("/bin/true"));
    }

    #[test]
    fn tokenize_tracks_offsets() {
        assert_eq!(tokenize("a  bc\td"), vec![(0, "a"), (3, "bc"), (6, "d")]);
        assert!(tokenize("").is_empty());
    }
}
