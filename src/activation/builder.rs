//! Activation command generation.
//!
//! The builder turns an [`ActivationRequest`] into the ordered list of
//! [`ActivationAction`]s that configure the GCC toolchain. It checks that
//! installed directories exist but never creates, repairs or modifies
//! anything; a missing directory means setup has to be re-run.

use std::path::{Path, PathBuf};

use crate::error::{Result, ToolenvError};
use crate::manifest::ToolRecord;
use crate::shell::{ActivationAction, HostPlatform};

use super::request::ActivationRequest;
use super::verify::VerifyTool;
use super::version::{major_version, normalize_version};
use super::versioned_dir::{FsVersionedDirectoryResolver, VersionedDirectoryResolver};

/// The only platform this repository's toolchain supports.
pub const SUPPORTED_PLATFORM: HostPlatform = HostPlatform::Linux;

/// Target triple of the bundled compiler.
pub const GCC_TARGET_TRIPLE: &str = "x86_64-pc-linux-gnu";

/// Variable naming the active C++ compiler.
pub const COMPILER_NAME_VAR: &str = "DEVELOPMENT_ENVIRONMENT_CPP_COMPILER_NAME";

/// Path-list variable holding compiler include directories.
pub const INCLUDE_VAR: &str = "INCLUDE";

/// Subtree of the repository where versioned tools live.
const TOOLS_DIR: &str = "Tools";

/// Tool key of the compiler under [`TOOLS_DIR`].
const GCC_TOOL: &str = "gcc";

/// Builds activation actions for one repository.
pub struct ActivationBuilder<'a, R = FsVersionedDirectoryResolver> {
    repo_root: PathBuf,
    manifest: &'a [ToolRecord],
    platform: HostPlatform,
    verify_tool: Option<VerifyTool>,
    resolver: R,
}

impl<'a> ActivationBuilder<'a> {
    /// Create a builder that resolves versions from the filesystem.
    pub fn new(repo_root: &Path, manifest: &'a [ToolRecord], platform: HostPlatform) -> Self {
        Self::with_resolver(
            repo_root,
            manifest,
            platform,
            FsVersionedDirectoryResolver::new(platform),
        )
    }
}

impl<'a, R: VersionedDirectoryResolver> ActivationBuilder<'a, R> {
    /// Create a builder with a custom versioned-directory resolver.
    pub fn with_resolver(
        repo_root: &Path,
        manifest: &'a [ToolRecord],
        platform: HostPlatform,
        resolver: R,
    ) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            manifest,
            platform,
            verify_tool: None,
            resolver,
        }
    }

    /// Set the verifier used for manifest entries.
    pub fn verify_tool(mut self, tool: VerifyTool) -> Self {
        self.verify_tool = Some(tool);
        self
    }

    /// Produce the activation actions for the builder's platform.
    ///
    /// Returns an empty list on unsupported platforms and a single message
    /// in fast mode. Otherwise verifies every manifest entry, then sets the
    /// compiler variables and augments `INCLUDE`.
    ///
    /// # Errors
    ///
    /// Returns `MissingDirectory` for the first expected directory that is
    /// absent; no actions are returned in that case. Returns
    /// `FundamentalDirUnset` when the manifest is non-empty and no verifier
    /// was configured.
    pub fn build(&self, request: &ActivationRequest) -> Result<Vec<ActivationAction>> {
        if self.platform != SUPPORTED_PLATFORM {
            tracing::debug!("No activation actions for {}", self.platform);
            return Ok(Vec::new());
        }

        if request.fast {
            return Ok(vec![ActivationAction::message(format!(
                "** FAST: Activating without verifying content. ({})",
                self.repo_root.display()
            ))]);
        }

        let mut actions = Vec::with_capacity(self.manifest.len() + 4);

        for record in self.manifest {
            let dir = record.directory(&self.repo_root);
            require_dir(&dir)?;

            let verifier = self
                .verify_tool
                .as_ref()
                .ok_or(ToolenvError::FundamentalDirUnset)?;
            actions.push(ActivationAction::execute(verifier.command_for(record, &dir)));
        }

        let resolved = self.resolver.resolve(
            &request.version_specs.tools,
            &self.repo_root.join(TOOLS_DIR),
            GCC_TOOL,
        )?;
        let version = normalize_version(&resolved.version);

        actions.push(ActivationAction::set(
            COMPILER_NAME_VAR,
            format!("GCC-{}", major_version(version)),
        ));
        actions.push(ActivationAction::set("CXX", "gcc"));
        actions.push(ActivationAction::set("CC", "gcc"));

        let include_dirs = gcc_include_dirs(&resolved.path, version);
        for dir in &include_dirs {
            require_dir(dir)?;
        }

        actions.push(ActivationAction::augment(
            INCLUDE_VAR,
            include_dirs.iter().map(|d| d.display().to_string()),
        ));

        tracing::debug!(
            "Built {} activation actions for GCC {}",
            actions.len(),
            version
        );

        Ok(actions)
    }
}

/// Build activation actions with the filesystem resolver.
pub fn build_activation_actions(
    platform: HostPlatform,
    request: &ActivationRequest,
    manifest: &[ToolRecord],
    repo_root: &Path,
    verify_tool: Option<VerifyTool>,
) -> Result<Vec<ActivationAction>> {
    let mut builder = ActivationBuilder::new(repo_root, manifest, platform);
    if let Some(tool) = verify_tool {
        builder = builder.verify_tool(tool);
    }
    builder.build(request)
}

/// Include directories of a GCC install, in search order: C++ standard
/// headers, their target-specific subdirectory, then the compiler's own
/// target headers.
pub fn gcc_include_dirs(gcc_dir: &Path, version: &str) -> [PathBuf; 3] {
    let cxx = gcc_dir.join("include").join("c++").join(version);
    let cxx_target = cxx.join(GCC_TARGET_TRIPLE);
    let internal = gcc_dir
        .join("lib")
        .join("gcc")
        .join(GCC_TARGET_TRIPLE)
        .join(version)
        .join("include");
    [cxx, cxx_target, internal]
}

fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        tracing::error!("Expected directory is missing: {}", path.display());
        Err(ToolenvError::MissingDirectory {
            path: path.to_path_buf(),
        })
    }
}
