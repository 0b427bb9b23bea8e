//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show reports and status messages.
    #[default]
    Normal,
    /// Show reports and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows success and warning messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
