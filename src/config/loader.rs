//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::ToolenvConfig;
use crate::error::{Result, ToolenvError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding toolenv configuration inside a repository.
pub const CONFIG_DIR: &str = ".toolenv";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.toolenv/config.yml`)
/// 2. Local overrides (`.toolenv/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .toolenv/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .toolenv/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given repository root.
    pub fn discover(repo_root: &Path) -> Self {
        Self {
            project: existing(repo_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(repo_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the repository root by walking up from `start`.
///
/// Looks for:
/// 1. `.toolenv` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as raw YAML Value (for merging).
fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    serde_yaml::from_str(&content).map_err(|e| ToolenvError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge all config files for a repository.
///
/// A repository without config files gets [`ToolenvConfig::default`].
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_config(repo_root: &Path) -> Result<ToolenvConfig> {
    let paths = ConfigPaths::discover(repo_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        tracing::debug!("No config under {}, using defaults", repo_root.display());
        return Ok(ToolenvConfig::default());
    }

    let mut configs = Vec::new();
    for path in existing {
        tracing::debug!("Loading config {}", path.display());
        configs.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_configs(&configs)).map_err(|e| ToolenvError::ConfigParseError {
        path: repo_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}
