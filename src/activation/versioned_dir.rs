//! Resolution of versioned tool directories.
//!
//! Tools are installed as `<root>/<tool>/<version>/[<platform>/]`. The
//! resolver honors a pinned version when one exists, otherwise it picks the
//! highest installed version.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ToolenvError};
use crate::shell::HostPlatform;

use super::version::{compare_versions, is_version_name};

/// A resolved tool directory and the version it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDirectory {
    /// Directory holding the tool installation.
    pub path: PathBuf,
    /// Version directory name, as found on disk (may carry a leading `v`).
    pub version: String,
}

/// Finds the installed directory for a versioned tool.
pub trait VersionedDirectoryResolver {
    /// Resolve `tool` under `search_root`, honoring `pinned` versions.
    fn resolve(
        &self,
        pinned: &HashMap<String, String>,
        search_root: &Path,
        tool: &str,
    ) -> Result<VersionedDirectory>;
}

/// Resolver that inspects the filesystem.
#[derive(Debug, Clone, Copy)]
pub struct FsVersionedDirectoryResolver {
    platform: HostPlatform,
}

impl FsVersionedDirectoryResolver {
    /// Create a resolver that descends into `platform`'s subdirectory when present.
    pub fn new(platform: HostPlatform) -> Self {
        Self { platform }
    }

    fn pinned_version_dir(tool_root: &Path, requested: &str) -> Option<String> {
        let alternate = match requested.strip_prefix('v') {
            Some(bare) => bare.to_string(),
            None => format!("v{}", requested),
        };

        [requested.to_string(), alternate]
            .into_iter()
            .find(|name| tool_root.join(name).is_dir())
    }

    fn latest_version_dir(tool_root: &Path) -> Result<Option<String>> {
        let mut latest: Option<String> = None;

        for entry in fs::read_dir(tool_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            if !is_version_name(&name) {
                continue;
            }

            let newer = latest
                .as_deref()
                .is_none_or(|current| compare_versions(&name, current).is_gt());
            if newer {
                latest = Some(name);
            }
        }

        Ok(latest)
    }
}

impl VersionedDirectoryResolver for FsVersionedDirectoryResolver {
    fn resolve(
        &self,
        pinned: &HashMap<String, String>,
        search_root: &Path,
        tool: &str,
    ) -> Result<VersionedDirectory> {
        let tool_root = search_root.join(tool);
        if !tool_root.is_dir() {
            return Err(ToolenvError::MissingDirectory { path: tool_root });
        }

        let requested = pinned.get(tool);
        let version = match requested {
            Some(requested) => Self::pinned_version_dir(&tool_root, requested),
            None => Self::latest_version_dir(&tool_root)?,
        }
        .ok_or_else(|| ToolenvError::VersionNotFound {
            tool: tool.to_string(),
            requested: requested.cloned(),
            root: tool_root.clone(),
        })?;

        let mut path = tool_root.join(&version);
        let platform_dir = path.join(self.platform.category_name());
        if platform_dir.is_dir() {
            path = platform_dir;
        }

        tracing::debug!(
            "Resolved {} {} at {}",
            tool,
            version,
            path.display()
        );

        Ok(VersionedDirectory { path, version })
    }
}
