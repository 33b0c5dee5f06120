//! Scripts command implementation.
//!
//! The `toolenv scripts` command reports which script extraction callbacks
//! this repository overrides.

use crate::error::Result;
use crate::scripts::{custom_script_extractors, ScriptExtractors};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scripts command implementation.
#[derive(Default)]
pub struct ScriptsCommand {
    extractors: Option<ScriptExtractors>,
}

impl ScriptsCommand {
    /// Create a scripts command for this repository's extractors.
    pub fn new() -> Self {
        Self {
            extractors: custom_script_extractors(),
        }
    }

    /// Create a scripts command for the given extractors.
    pub fn with_extractors(extractors: Option<ScriptExtractors>) -> Self {
        Self { extractors }
    }
}

impl Command for ScriptsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.extractors.filter(|e| !e.is_default()) {
            None => ui.emit("No custom script extractors; framework defaults apply.\n"),
            Some(extractors) => {
                for name in extractors.overridden() {
                    ui.emit(&format!("{}\n", name));
                }
            }
        }
        Ok(CommandResult::success())
    }
}
