//! Error types for toolenv operations.
//!
//! This module defines [`ToolenvError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`ToolenvError::MissingDirectory`] is an integrity violation: a prior
//!   installation step did not produce the expected layout. It is never
//!   recovered; activation stops and the operator re-runs setup.
//! - Use `anyhow::Error` (via `ToolenvError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for toolenv operations.
#[derive(Debug, Error)]
pub enum ToolenvError {
    /// A directory the activation relies on is absent.
    #[error("Required directory is missing: {path}")]
    MissingDirectory { path: PathBuf },

    /// No usable version directory was found for a tool.
    #[error("No version of '{tool}' found under {root}{}", requested_suffix(.requested))]
    VersionNotFound {
        tool: String,
        requested: Option<String>,
        root: PathBuf,
    },

    /// Verification commands need the framework root, but none was configured.
    #[error(
        "Bootstrap framework directory is not set (use --fundamental-dir or DEVELOPMENT_ENVIRONMENT_FUNDAMENTAL)"
    )]
    FundamentalDirUnset,

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A `NAME=VERSION` pair could not be parsed.
    #[error("Invalid version spec '{spec}': expected NAME=VERSION")]
    InvalidVersionSpec { spec: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn requested_suffix(requested: &Option<String>) -> String {
    match requested {
        Some(version) => format!(" (requested {})", version),
        None => String::new(),
    }
}

/// Result type alias for toolenv operations.
pub type Result<T> = std::result::Result<T, ToolenvError>;
