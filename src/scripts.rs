//! Custom script extractors.
//!
//! A repository may override how the framework finds, invokes, documents
//! and names the scripts in its `Scripts` directory (and in the `Scripts`
//! directories of repositories that depend on it). Each callback is
//! optional; an absent callback means the framework's default.
//!
//! This repository keeps every default, so [`custom_script_extractors`]
//! returns `None`.

use std::path::{Path, PathBuf};

use crate::activation::VersionSpecs;
use crate::shell::ActivationAction;

/// Enumerates subdirectories to search: `(subdir, should_recurse)`.
pub type DirGenerator = fn(&Path, &VersionSpecs) -> Vec<(PathBuf, bool)>;

/// Builds the commands that invoke a script; `None` if unsupported.
pub type CreateCommands = fn(&Path) -> Option<Vec<ActivationAction>>;

/// Extracts documentation from a script.
pub type CreateDocumentation = fn(&Path) -> String;

/// Returns the name a script is exposed under.
pub type ScriptNameDecorator = fn(&Path) -> String;

/// Callbacks customizing script extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptExtractors {
    pub dir_generator: Option<DirGenerator>,
    pub create_commands: Option<CreateCommands>,
    pub create_documentation: Option<CreateDocumentation>,
    pub script_name_decorator: Option<ScriptNameDecorator>,
}

impl ScriptExtractors {
    /// Whether every callback is left to the framework.
    pub fn is_default(&self) -> bool {
        self.dir_generator.is_none()
            && self.create_commands.is_none()
            && self.create_documentation.is_none()
            && self.script_name_decorator.is_none()
    }

    /// Names of the callbacks that are overridden.
    pub fn overridden(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.dir_generator.is_some() {
            names.push("dir_generator");
        }
        if self.create_commands.is_some() {
            names.push("create_commands");
        }
        if self.create_documentation.is_some() {
            names.push("create_documentation");
        }
        if self.script_name_decorator.is_some() {
            names.push("script_name_decorator");
        }
        names
    }
}

/// This repository's script extractors: none.
pub fn custom_script_extractors() -> Option<ScriptExtractors> {
    None
}
