//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CronlintTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Reports and status go to stdout; errors go to stderr so that a failed
/// run never corrupts machine-readable output.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: CronlintTheme,
    mode: OutputMode,
    use_color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let use_color = should_use_colors(no_color);
        let theme = if use_color {
            CronlintTheme::new()
        } else {
            CronlintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            use_color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn use_color(&self) -> bool {
        self.use_color
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
