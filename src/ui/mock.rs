//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use toolenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.emit("export CC=\"gcc\"\n");
//! ui.success("Activated");
//!
//! assert_eq!(ui.emitted(), "export CC=\"gcc\"\n");
//! assert!(ui.successes().contains(&"Activated".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    emitted: String,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Everything emitted, concatenated.
    pub fn emitted(&self) -> &str {
        &self.emitted
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push_str(text);
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
