//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, ToolenvTheme, UserInterface};

/// Terminal UI implementation.
///
/// Emitted output goes to stdout; everything else goes to stderr so a
/// script can be captured with `eval "$(toolenv activate)"`.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ToolenvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ToolenvTheme::new()
        } else {
            ToolenvTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        self.out.flush().ok();
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
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
