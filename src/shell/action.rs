//! Abstract activation actions.
//!
//! Actions describe what an activation wants done to the shell session
//! without committing to any shell's syntax. A [`ShellRenderer`] turns them
//! into concrete statements.
//!
//! [`ShellRenderer`]: crate::shell::ShellRenderer

use serde::Serialize;

/// A single shell-agnostic activation instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActivationAction {
    /// Print a line of text.
    Message { text: String },

    /// Run a command line verbatim.
    Execute { command: String },

    /// Assign an environment variable.
    Set { name: String, value: String },

    /// Extend a path-list variable with values it doesn't already contain.
    Augment { name: String, values: Vec<String> },
}

impl ActivationAction {
    /// Create a message action.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message { text: text.into() }
    }

    /// Create an execute action.
    pub fn execute(command: impl Into<String>) -> Self {
        Self::Execute {
            command: command.into(),
        }
    }

    /// Create a set action.
    pub fn set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an augment action.
    pub fn augment<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Augment {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Short label for the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message { .. } => "message",
            Self::Execute { .. } => "execute",
            Self::Set { .. } => "set",
            Self::Augment { .. } => "augment",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_fill_fields() {
        assert_eq!(
            ActivationAction::set("CC", "gcc"),
            ActivationAction::Set {
                name: "CC".to_string(),
                value: "gcc".to_string()
            }
        );
        assert_eq!(
            ActivationAction::augment("INCLUDE", ["/a", "/b"]),
            ActivationAction::Augment {
                name: "INCLUDE".to_string(),
                values: vec!["/a".to_string(), "/b".to_string()]
            }
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(ActivationAction::message("hi").kind(), "message");
        assert_eq!(ActivationAction::execute("true").kind(), "execute");
        assert_eq!(ActivationAction::set("A", "b").kind(), "set");
        assert_eq!(ActivationAction::augment("P", ["x"]).kind(), "augment");
    }

    #[test]
    fn serializes_with_action_tag() {
        let json = serde_json::to_value(ActivationAction::set("CXX", "gcc")).unwrap();
        assert_eq!(json["action"], "set");
        assert_eq!(json["name"], "CXX");
        assert_eq!(json["value"], "gcc");

        let json = serde_json::to_value(ActivationAction::augment("INCLUDE", ["/x"])).unwrap();
        assert_eq!(json["action"], "augment");
        assert_eq!(json["values"][0], "/x");
    }
}
