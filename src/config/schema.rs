//! Configuration schema definitions for toolenv.
//!
//! These structs map to `.toolenv/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::activation::{
    VerifyTool, VersionSpecs, DEFAULT_VERIFY_INTERPRETER, DEFAULT_VERIFY_SCRIPT,
};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolenvConfig {
    /// Root of the bootstrap framework.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fundamental_dir: Option<PathBuf>,

    /// How installed tools are verified.
    pub verify: VerifySettings,

    /// Pinned tool and library versions.
    pub versions: VersionSpecs,
}

/// Verification tool settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySettings {
    /// Interpreter that runs the verification script.
    pub interpreter: String,

    /// Script path, relative to the framework root unless absolute.
    pub script: PathBuf,
}

impl Default for VerifySettings {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_VERIFY_INTERPRETER.to_string(),
            script: PathBuf::from(DEFAULT_VERIFY_SCRIPT),
        }
    }
}

impl VerifySettings {
    /// Verifier under the given framework root.
    pub fn tool(&self, fundamental_dir: &Path) -> VerifyTool {
        VerifyTool::with_script(fundamental_dir, self.interpreter.clone(), &self.script)
    }
}
