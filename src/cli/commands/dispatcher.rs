//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    repo_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given repository root.
    pub fn new(repo_root: PathBuf) -> Self {
        Self { repo_root }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Activate(args) => {
                let cmd = super::activate::ActivateCommand::new(&self.repo_root, args.clone())
                    .with_debug(cli.debug);
                cmd.execute(ui)
            }
            Commands::Manifest(args) => {
                let cmd = super::manifest::ManifestCommand::new(&self.repo_root, args.clone());
                cmd.execute(ui)
            }
            Commands::Scripts => super::scripts::ScriptsCommand::new().execute(ui),
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
