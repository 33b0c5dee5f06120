//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::shell::{HostPlatform, ShellFamily};

/// toolenv - Repository activation hooks for a pinned GCC toolchain.
#[derive(Debug, Parser)]
#[command(name = "toolenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to repository root (overrides discovery from the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the activation script for this repository
    Activate(ActivateArgs),

    /// List the tools this repository requires
    Manifest(ManifestArgs),

    /// Show the custom script extractors this repository provides
    Scripts,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `activate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ActivateArgs {
    /// Skip verification of installed tools
    #[arg(long)]
    pub fast: bool,

    /// Shell to render for (defaults to the detected shell)
    #[arg(long, value_enum)]
    pub shell: Option<ShellFamily>,

    /// Platform to activate for (defaults to the host)
    #[arg(long, value_enum)]
    pub platform: Option<HostPlatform>,

    /// Configuration being activated
    #[arg(long)]
    pub configuration: Option<String>,

    /// Directory for generated activation output
    #[arg(long)]
    pub generated_dir: Option<PathBuf>,

    /// Root of the bootstrap framework
    #[arg(long, env = "DEVELOPMENT_ENVIRONMENT_FUNDAMENTAL")]
    pub fundamental_dir: Option<PathBuf>,

    /// Pin a tool version (NAME=VERSION, repeatable)
    #[arg(long = "tool-version", value_name = "NAME=VERSION")]
    pub tool_versions: Vec<String>,

    /// Activate as a mixin repository
    #[arg(long)]
    pub mixin: bool,

    /// Print the actions as JSON instead of a script
    #[arg(long)]
    pub json: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManifestArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_activate_flags() {
        let cli = Cli::parse_from([
            "toolenv",
            "activate",
            "--fast",
            "--shell",
            "powershell",
            "--platform",
            "linux",
            "--tool-version",
            "gcc=v9.1.0",
            "--tool-version",
            "cmake=3.20",
        ]);

        let Commands::Activate(args) = cli.command else {
            panic!("Expected Activate command");
        };
        assert!(args.fast);
        assert_eq!(args.shell, Some(ShellFamily::PowerShell));
        assert_eq!(args.platform, Some(HostPlatform::Linux));
        assert_eq!(args.tool_versions, vec!["gcc=v9.1.0", "cmake=3.20"]);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["toolenv", "manifest", "--json", "--quiet"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Manifest(ManifestArgs { json: true })));
    }

    #[test]
    fn macos_platform_value() {
        let cli = Cli::parse_from(["toolenv", "activate", "--platform", "macos"]);
        let Commands::Activate(args) = cli.command else {
            panic!("Expected Activate command");
        };
        assert_eq!(args.platform, Some(HostPlatform::MacOS));
    }
}
