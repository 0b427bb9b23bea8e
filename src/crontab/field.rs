//! Schedule field grammar.
//!
//! Each of the five time fields of a crontab entry is a comma-separated
//! list of items. An item is `*`, a value, or an inclusive `A-B` range,
//! optionally followed by `/S` to take every S-th value.

use thiserror::Error;

const MONTH_NAMES: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];
const WEEKDAY_NAMES: &[&str] = &["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// One of the five schedule slots, in crontab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// All fields in the order they appear on a line.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day-of-month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day-of-week",
        }
    }

    /// The grammar constraints for this field.
    pub fn spec(&self) -> FieldSpec {
        match self {
            FieldKind::Minute => FieldSpec::numeric(*self, 0, 59),
            FieldKind::Hour => FieldSpec::numeric(*self, 0, 23),
            FieldKind::DayOfMonth => FieldSpec::numeric(*self, 1, 31),
            FieldKind::Month => FieldSpec::named(*self, 1, 12, MONTH_NAMES),
            FieldKind::DayOfWeek => FieldSpec::named(*self, 0, 6, WEEKDAY_NAMES),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single field expression was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} has an empty list item in '{expr}'")]
    EmptyItem { field: FieldKind, expr: String },

    #[error("{field} out of range: {value} is not within {min}-{max}")]
    OutOfRange {
        field: FieldKind,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{field} has invalid value '{value}'")]
    InvalidValue { field: FieldKind, value: String },

    #[error("{field} range {start}-{end} is reversed")]
    ReversedRange { field: FieldKind, start: u32, end: u32 },

    #[error("{field} has invalid step '{step}': expected a number from 1 to {max}")]
    InvalidStep {
        field: FieldKind,
        step: String,
        max: u32,
    },
}

impl FieldError {
    /// The field the error belongs to.
    pub fn field(&self) -> FieldKind {
        match self {
            FieldError::EmptyItem { field, .. }
            | FieldError::OutOfRange { field, .. }
            | FieldError::InvalidValue { field, .. }
            | FieldError::ReversedRange { field, .. }
            | FieldError::InvalidStep { field, .. } => *field,
        }
    }
}

/// Valid range and symbolic names for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    pub min: u32,
    pub max: u32,
    /// Names accepted in place of numbers; `names[i]` means `min + i`.
    pub names: &'static [&'static str],
}

impl FieldSpec {
    fn numeric(kind: FieldKind, min: u32, max: u32) -> Self {
        Self {
            kind,
            min,
            max,
            names: &[],
        }
    }

    fn named(kind: FieldKind, min: u32, max: u32, names: &'static [&'static str]) -> Self {
        Self {
            kind,
            min,
            max,
            names,
        }
    }

    /// Check a whole field expression such as `1,15,30-45/5`.
    pub fn validate(&self, expr: &str) -> Result<(), FieldError> {
        for item in expr.split(',') {
            if item.is_empty() {
                return Err(FieldError::EmptyItem {
                    field: self.kind,
                    expr: expr.to_string(),
                });
            }
            self.validate_item(item)?;
        }
        Ok(())
    }

    fn validate_item(&self, item: &str) -> Result<(), FieldError> {
        let (base, step) = match item.split_once('/') {
            Some((base, step)) => (base, Some(step)),
            None => (item, None),
        };

        if let Some(step) = step {
            self.parse_step(step)?;
        }

        if base == "*" {
            return Ok(());
        }

        match base.split_once('-') {
            Some((start, end)) => {
                let start = self.parse_value(start)?;
                let end = self.parse_value(end)?;
                if start > end {
                    return Err(FieldError::ReversedRange {
                        field: self.kind,
                        start,
                        end,
                    });
                }
                Ok(())
            }
            None => self.parse_value(base).map(|_| ()),
        }
    }

    fn parse_step(&self, step: &str) -> Result<u32, FieldError> {
        let invalid = || FieldError::InvalidStep {
            field: self.kind,
            step: step.to_string(),
            max: self.max,
        };
        let value = parse_number(step).ok_or_else(invalid)?;
        if value == 0 || value > self.max {
            return Err(invalid());
        }
        Ok(value)
    }

    fn parse_value(&self, token: &str) -> Result<u32, FieldError> {
        if let Some(index) = self
            .names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
        {
            return Ok(self.min + index as u32);
        }

        let value = parse_number(token).ok_or_else(|| FieldError::InvalidValue {
            field: self.kind,
            value: token.to_string(),
        })?;

        if value < self.min || value > self.max {
            return Err(FieldError::OutOfRange {
                field: self.kind,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// Parse an unsigned decimal with no sign or whitespace.
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
