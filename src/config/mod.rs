//! Configuration loading and parsing for toolenv.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use toolenv::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".toolenv");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "versions:\n  tools:\n    gcc: v9.1.0\n").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.versions.tools["gcc"], "v9.1.0");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.toolenv/config.yml`)
//! 2. Local overrides (`.toolenv/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{find_repo_root, load_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ToolenvConfig, VerifySettings};
