//! Visual theme and styling.

use console::Style;

/// Toolenv's visual theme.
#[derive(Debug, Clone)]
pub struct ToolenvTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ToolenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolenvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a `key: value` line.
    pub fn format_field(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Check if colors should be enabled.
///
/// Status output goes to stderr, so that is the stream checked.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
