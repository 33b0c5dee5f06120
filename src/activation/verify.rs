//! Invocation of the framework's binary verification tool.

use std::path::{Path, PathBuf};

use crate::manifest::ToolRecord;

/// Default verification script, relative to the framework root.
pub const DEFAULT_VERIFY_SCRIPT: &str = "RepositoryBootstrap/SetupAndActivate/AcquireBinaries.py";

/// Default interpreter used to run the verification script.
pub const DEFAULT_VERIFY_INTERPRETER: &str = "python";

/// How to call the external verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyTool {
    /// Program that runs the script.
    pub interpreter: String,
    /// Absolute path of the verification script.
    pub script: PathBuf,
}

impl VerifyTool {
    /// The default verifier under a framework root.
    pub fn under(fundamental_dir: &Path) -> Self {
        Self::with_script(fundamental_dir, DEFAULT_VERIFY_INTERPRETER, DEFAULT_VERIFY_SCRIPT)
    }

    /// A verifier with a custom interpreter and script, resolving a relative
    /// script against the framework root.
    pub fn with_script(
        fundamental_dir: &Path,
        interpreter: impl Into<String>,
        script: impl AsRef<Path>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: fundamental_dir.join(script),
        }
    }

    /// Command line verifying `record` installed at `dir`.
    pub fn command_for(&self, record: &ToolRecord, dir: &Path) -> String {
        format!(
            "{} \"{}\" Verify \"{}\" \"{}\" \"{}\"",
            self.interpreter,
            self.script.display(),
            record.name,
            dir.display(),
            record.version_or_hash
        )
    }
}
