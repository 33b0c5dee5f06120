//! Command-line interface for toolenv.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{ActivateArgs, Cli, Commands, CompletionsArgs, ManifestArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
