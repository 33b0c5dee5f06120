//! Repository activation.
//!
//! This module handles building the shell actions that activate this
//! repository's toolchain:
//! - Activation inputs in [`request`]
//! - Action generation in [`builder`]
//! - Versioned tool directory lookup in [`versioned_dir`]
//! - Verification command lines in [`verify`]
//!
//! # Example
//!
//! ```
//! use toolenv::activation::{build_activation_actions, ActivationRequest};
//! use toolenv::manifest::TOOL_MANIFEST;
//! use toolenv::shell::HostPlatform;
//! use std::path::Path;
//!
//! // Fast activation skips every filesystem check.
//! let actions = build_activation_actions(
//!     HostPlatform::Linux,
//!     &ActivationRequest::fast(),
//!     TOOL_MANIFEST,
//!     Path::new("/repo"),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(actions.len(), 1);
//! ```

pub mod builder;
pub mod request;
pub mod verify;
pub mod version;
pub mod versioned_dir;

pub use builder::{
    build_activation_actions, gcc_include_dirs, ActivationBuilder, COMPILER_NAME_VAR,
    GCC_TARGET_TRIPLE, INCLUDE_VAR, SUPPORTED_PLATFORM,
};
pub use request::{parse_version_override, ActivationRequest, RepositoryDescriptor, VersionSpecs};
pub use verify::{VerifyTool, DEFAULT_VERIFY_INTERPRETER, DEFAULT_VERIFY_SCRIPT};
pub use version::{compare_versions, is_version_name, major_version, normalize_version};
pub use versioned_dir::{FsVersionedDirectoryResolver, VersionedDirectory, VersionedDirectoryResolver};
