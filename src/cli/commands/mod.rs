//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod activate;
pub mod completions;
pub mod dispatcher;
pub mod manifest;
pub mod scripts;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
