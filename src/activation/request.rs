//! Inputs handed to an activation by the bootstrap framework.

use crate::error::{Result, ToolenvError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Pinned versions for tools and libraries, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionSpecs {
    /// Tool versions (e.g., `gcc: v9.1.0`).
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tools: HashMap<String, String>,

    /// Library versions, keyed by language then library name.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub libraries: HashMap<String, HashMap<String, String>>,
}

impl VersionSpecs {
    /// Pin a tool version, replacing any existing pin.
    pub fn pin_tool(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.tools.insert(name.into(), version.into());
    }

    /// Apply `NAME=VERSION` overrides on top of these specs.
    pub fn apply_overrides(&mut self, overrides: &[String]) -> Result<()> {
        for spec in overrides {
            let (name, version) = parse_version_override(spec)?;
            self.pin_tool(name, version);
        }
        Ok(())
    }
}

/// Parse a `NAME=VERSION` override.
pub fn parse_version_override(spec: &str) -> Result<(&str, &str)> {
    match spec.split_once('=') {
        Some((name, version)) if !name.trim().is_empty() && !version.trim().is_empty() => {
            Ok((name.trim(), version.trim()))
        }
        _ => Err(ToolenvError::InvalidVersionSpec {
            spec: spec.to_string(),
        }),
    }
}

/// A repository this one depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Stable repository identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Local checkout root.
    pub root: PathBuf,
}

/// Everything the framework passes to an activation hook.
///
/// Only `fast` and `version_specs` change what gets emitted; the remaining
/// fields are carried so hooks share one signature.
#[derive(Debug, Clone, Default)]
pub struct ActivationRequest {
    /// Named configuration being activated, if any.
    pub configuration: Option<String>,
    /// Pinned tool and library versions.
    pub version_specs: VersionSpecs,
    /// Directory for generated activation output.
    pub generated_dir: Option<PathBuf>,
    /// Debug activation.
    pub debug: bool,
    /// Verbose activation.
    pub verbose: bool,
    /// Skip all verification.
    pub fast: bool,
    /// Repositories this one depends on.
    pub repositories: Vec<RepositoryDescriptor>,
    /// Whether this repository is activated as a mixin.
    pub is_mixin_repo: bool,
}

impl ActivationRequest {
    /// A request with only the fast flag set.
    pub fn fast() -> Self {
        Self {
            fast: true,
            ..Default::default()
        }
    }
}
