//! Parsed crontab lines.

use thiserror::Error;

use super::field::FieldError;

/// An `@keyword` schedule standing in for the five time fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialSchedule {
    Reboot,
    Hourly,
    Daily,
    Midnight,
    Weekly,
    Monthly,
    Yearly,
    Annually,
}

impl SpecialSchedule {
    /// Every keyword cron accepts after `@`.
    pub const ALL: [SpecialSchedule; 8] = [
        SpecialSchedule::Reboot,
        SpecialSchedule::Hourly,
        SpecialSchedule::Daily,
        SpecialSchedule::Midnight,
        SpecialSchedule::Weekly,
        SpecialSchedule::Monthly,
        SpecialSchedule::Yearly,
        SpecialSchedule::Annually,
    ];

    /// Look up a keyword (without the leading `@`).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keyword() == keyword)
    }

    /// The keyword without the leading `@`.
    pub fn keyword(&self) -> &'static str {
        match self {
            SpecialSchedule::Reboot => "reboot",
            SpecialSchedule::Hourly => "hourly",
            SpecialSchedule::Daily => "daily",
            SpecialSchedule::Midnight => "midnight",
            SpecialSchedule::Weekly => "weekly",
            SpecialSchedule::Monthly => "monthly",
            SpecialSchedule::Yearly => "yearly",
            SpecialSchedule::Annually => "annually",
        }
    }
}

impl std::fmt::Display for SpecialSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.keyword())
    }
}

/// The time part of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schedule {
    /// minute, hour, day-of-month, month, day-of-week
    Fields([String; 5]),
    Special(SpecialSchedule),
}

/// What a line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// `NAME=value`, only recognised when environment lines are allowed.
    Environment { name: String, value: String },
    /// A schedule line, whether or not it is valid.
    Entry,
}

/// Why an entry line is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("malformed line: expected 5 schedule fields and a command, found {tokens} token(s)")]
    Malformed { tokens: usize },

    #[error("unknown special schedule '@{keyword}'")]
    UnknownSpecial { keyword: String },

    #[error("missing command after '@{keyword}'")]
    MissingCommand { keyword: String },

    #[error("{error}")]
    Field {
        error: FieldError,
        /// 1-based column of the offending field.
        column: usize,
    },
}

impl LineError {
    /// 1-based column the error points at.
    pub fn column(&self) -> usize {
        match self {
            LineError::Field { column, .. } => *column,
            _ => 1,
        }
    }
}

/// One line of a crontab, with everything the validator learned about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrontabLine {
    /// 1-based line number.
    pub number: usize,
    /// Text as read, without the line terminator.
    pub raw: String,
    pub kind: LineKind,
    pub schedule: Option<Schedule>,
    /// Everything after the schedule, internal whitespace preserved.
    pub command: Option<String>,
    /// 1-based column where the command starts.
    pub command_column: Option<usize>,
    pub error: Option<LineError>,
}

impl CrontabLine {
    pub(crate) fn skipped(number: usize, raw: &str, kind: LineKind) -> Self {
        Self {
            number,
            raw: raw.to_string(),
            kind,
            schedule: None,
            command: None,
            command_column: None,
            error: None,
        }
    }

    pub(crate) fn invalid(number: usize, raw: &str, error: LineError) -> Self {
        Self {
            number,
            raw: raw.to_string(),
            kind: LineKind::Entry,
            schedule: None,
            command: None,
            command_column: None,
            error: Some(error),
        }
    }

    /// Lines with no error are valid, including skipped ones.
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Whether this line is a schedule entry rather than a skipped line.
    pub fn is_entry(&self) -> bool {
        self.kind == LineKind::Entry
    }

    /// First whitespace-delimited token of the command.
    pub fn command_token(&self) -> Option<&str> {
        self.command.as_deref()?.split_whitespace().next()
    }

    /// Human-readable reason the line is invalid.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
