//! Third-party tools this repository expects to find installed.
//!
//! The manifest is fixed at authoring time. Setup installs each tool under
//! its relative path; activation verifies the installation is still intact.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A required tool installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolRecord {
    /// Display name (e.g., "GCC - 9.1.0").
    pub name: &'static str,

    /// Content hash or version the install must match. Opaque: never
    /// compared or ordered, only handed to the verifier.
    pub version_or_hash: &'static str,

    /// Install location relative to the repository root.
    pub path_segments: &'static [&'static str],
}

impl ToolRecord {
    /// Absolute install directory under `repo_root`.
    pub fn directory(&self, repo_root: &Path) -> PathBuf {
        self.path_segments
            .iter()
            .fold(repo_root.to_path_buf(), |dir, segment| dir.join(segment))
    }
}

/// Tools required by this repository, in verification order.
pub const TOOL_MANIFEST: &[ToolRecord] = &[ToolRecord {
    name: "GCC - 9.1.0",
    version_or_hash: "f7dbc5a030c4aad5742c97687fa9fe53a16c66e3c9959f50be14c13114fa12f1",
    path_segments: &["Tools", "gcc", "v9.1.0", "Linux"],
}];

/// The repository's tool manifest.
pub fn tool_manifest() -> &'static [ToolRecord] {
    TOOL_MANIFEST
}
