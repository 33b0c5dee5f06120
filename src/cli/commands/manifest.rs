//! Manifest command implementation.
//!
//! The `toolenv manifest` command lists the tools this repository requires
//! and whether each one is installed.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::ManifestArgs;
use crate::error::Result;
use crate::manifest::{tool_manifest, ToolRecord};
use crate::ui::{should_use_colors, ToolenvTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The manifest command implementation.
pub struct ManifestCommand {
    repo_root: PathBuf,
    args: ManifestArgs,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    #[serde(flatten)]
    record: &'a ToolRecord,
    directory: PathBuf,
    installed: bool,
}

impl ManifestCommand {
    /// Create a new manifest command.
    pub fn new(repo_root: &Path, args: ManifestArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            args,
        }
    }

    fn entries(&self) -> Vec<ManifestEntry<'static>> {
        tool_manifest()
            .iter()
            .map(|record| {
                let directory = record.directory(&self.repo_root);
                ManifestEntry {
                    record,
                    installed: directory.is_dir(),
                    directory,
                }
            })
            .collect()
    }
}

impl Command for ManifestCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries = self.entries();

        if self.args.json {
            let mut json =
                serde_json::to_string_pretty(&entries).context("Failed to serialize manifest")?;
            json.push('\n');
            ui.emit(&json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            ToolenvTheme::new()
        } else {
            ToolenvTheme::plain()
        };

        for entry in &entries {
            let status = if entry.installed {
                theme.success.apply_to("installed")
            } else {
                theme.warning.apply_to("missing")
            };
            ui.emit(&format!(
                "{} ({})\n  {}\n  {}\n",
                entry.record.name,
                status,
                theme.format_field("Path", &entry.directory.display().to_string()),
                theme.format_field("Version", entry.record.version_or_hash),
            ));
        }

        Ok(CommandResult::success())
    }
}
