//! toolenv - Repository activation hooks for a pinned GCC toolchain.
//!
//! toolenv describes the third-party tools a repository needs and, during
//! environment activation, verifies them and emits the shell statements that
//! put the bundled GCC on the compiler path.
//!
//! # Modules
//!
//! - [`activation`] - Activation requests and action generation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Required tool installations
//! - [`scripts`] - Custom script extractor hook
//! - [`shell`] - Shell-agnostic actions and per-shell rendering
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use toolenv::shell::{ActivationAction, BashRenderer, ShellRenderer};
//!
//! let script = BashRenderer.render_script(&[ActivationAction::set("CC", "gcc")]);
//! assert_eq!(script, "#!/usr/bin/env bash\nexport CC=\"gcc\"\n");
//! ```

pub mod activation;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod scripts;
pub mod shell;
pub mod ui;

pub use error::{Result, ToolenvError};
