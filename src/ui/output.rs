//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status plus detail lines.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Build the mode from the global CLI flags; `--quiet` wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
