//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! Activation scripts are emitted through [`UserInterface::emit`] so they
//! land on stdout untouched; status lines go to stderr.

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ToolenvTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Write machine-consumable output (scripts, JSON) verbatim.
    fn emit(&mut self, text: &str);

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
