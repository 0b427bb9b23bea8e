//! Source locations.

use std::path::PathBuf;

/// A position in a crontab file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Line (1-indexed).
    pub line: usize,
    /// Column (1-indexed).
    pub column: usize,
}

impl Span {
    /// Point at the start of a line.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self::at(file, line, 1)
    }

    /// Point at a precise position.
    pub fn at(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_starts_at_column_one() {
        let span = Span::line("crontab", 10);
        assert_eq!(span.line, 10);
        assert_eq!(span.column, 1);
    }

    #[test]
    fn displays_as_file_line_column() {
        let span = Span::at("/etc/crontab", 3, 7);
        assert_eq!(span.to_string(), "/etc/crontab:3:7");
    }
}
