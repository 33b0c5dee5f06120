//! Activate command implementation.
//!
//! The `toolenv activate` command builds the activation actions for the
//! repository and prints them as a script for the target shell.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::activation::{ActivationBuilder, ActivationRequest};
use crate::cli::args::ActivateArgs;
use crate::config::load_config;
use crate::error::{Result, ToolenvError};
use crate::manifest::tool_manifest;
use crate::shell::{renderer_for, ActivationAction, HostPlatform, ShellFamily};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The activate command implementation.
pub struct ActivateCommand {
    repo_root: PathBuf,
    args: ActivateArgs,
    debug: bool,
}

impl ActivateCommand {
    /// Create a new activate command.
    pub fn new(repo_root: &Path, args: ActivateArgs) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            args,
            debug: false,
        }
    }

    /// Mark the activation as a debug activation.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the actions without rendering them.
    pub fn actions(&self, ui: &mut dyn UserInterface) -> Result<Vec<ActivationAction>> {
        let config = load_config(&self.repo_root)?;

        let mut version_specs = config.versions.clone();
        version_specs.apply_overrides(&self.args.tool_versions)?;

        let request = ActivationRequest {
            configuration: self.args.configuration.clone(),
            version_specs,
            generated_dir: self.args.generated_dir.clone(),
            debug: self.debug,
            verbose: ui.output_mode().shows_detail(),
            fast: self.args.fast,
            repositories: Vec::new(),
            is_mixin_repo: self.args.mixin,
        };

        let platform = self.platform();
        let fundamental_dir = self
            .args
            .fundamental_dir
            .as_ref()
            .or(config.fundamental_dir.as_ref());

        let mut builder = ActivationBuilder::new(&self.repo_root, tool_manifest(), platform);
        if let Some(dir) = fundamental_dir {
            builder = builder.verify_tool(config.verify.tool(dir));
        }

        tracing::debug!(
            "Activating {} for {} (fast: {})",
            self.repo_root.display(),
            platform,
            request.fast
        );

        builder.build(&request).inspect_err(|e| {
            if matches!(e, ToolenvError::MissingDirectory { .. }) {
                ui.warning("Installed tools are incomplete. Re-run setup, or activate with --fast to skip verification.");
            }
        })
    }

    fn platform(&self) -> HostPlatform {
        self.args.platform.unwrap_or_else(HostPlatform::current)
    }

    fn shell(&self) -> ShellFamily {
        self.args
            .shell
            .unwrap_or_else(|| ShellFamily::detect(self.platform()))
    }

    fn render(&self, actions: &[ActivationAction]) -> Result<String> {
        if self.args.json {
            let mut json = serde_json::to_string_pretty(actions)
                .context("Failed to serialize activation actions")?;
            json.push('\n');
            Ok(json)
        } else {
            Ok(renderer_for(self.shell()).render_script(actions))
        }
    }
}

impl Command for ActivateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let actions = self.actions(ui)?;

        if ui.output_mode().shows_detail() {
            for action in &actions {
                ui.message(&format!("  {}", action.kind()));
            }
        }

        let output = self.render(&actions)?;

        match &self.args.output {
            Some(path) => {
                fs::write(path, &output)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                ui.success(&format!(
                    "Wrote {} activation actions to {}",
                    actions.len(),
                    path.display()
                ));
            }
            None => ui.emit(&output),
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::gcc_include_dirs;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn install_gcc(root: &Path) {
        let gcc_dir = root.join("Tools/gcc/v9.1.0/Linux");
        for dir in gcc_include_dirs(&gcc_dir, "9.1.0") {
            fs::create_dir_all(dir).unwrap();
        }
    }

    fn linux_args() -> ActivateArgs {
        ActivateArgs {
            platform: Some(HostPlatform::Linux),
            shell: Some(ShellFamily::Bash),
            fundamental_dir: Some(PathBuf::from("/fw")),
            ..Default::default()
        }
    }

    #[test]
    fn emits_bash_script() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        let mut ui = MockUI::new();

        let result = ActivateCommand::new(temp.path(), linux_args())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let script = ui.emitted();
        assert!(script.starts_with("#!/usr/bin/env bash\n"));
        assert!(script.contains("Verify \"GCC - 9.1.0\""));
        assert!(script.contains(r#"export DEVELOPMENT_ENVIRONMENT_CPP_COMPILER_NAME="GCC-9""#));
        assert!(script.contains(r#"export CXX="gcc""#));
        assert!(script.contains(r#"export CC="gcc""#));
        assert_eq!(script.matches("export INCLUDE=").count(), 3);
    }

    #[test]
    fn json_output_lists_actions() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        let mut ui = MockUI::new();
        let args = ActivateArgs {
            json: true,
            ..linux_args()
        };

        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(ui.emitted()).unwrap();
        let actions = parsed.as_array().unwrap();
        assert_eq!(actions.len(), 5);
        assert_eq!(actions[0]["action"], "execute");
        assert_eq!(actions[4]["action"], "augment");
    }

    #[test]
    fn config_pin_and_flag_override() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        fs::create_dir_all(temp.path().join(".toolenv")).unwrap();
        fs::write(
            temp.path().join(".toolenv/config.yml"),
            "versions:\n  tools:\n    gcc: v12.1.0\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        let err = ActivateCommand::new(temp.path(), linux_args())
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, ToolenvError::VersionNotFound { .. }));

        let args = ActivateArgs {
            tool_versions: vec!["gcc=9.1.0".to_string()],
            ..linux_args()
        };
        let mut ui = MockUI::new();
        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();
        assert!(ui.emitted().contains("GCC-9"));
    }

    #[test]
    fn fundamental_dir_from_config() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        fs::create_dir_all(temp.path().join(".toolenv")).unwrap();
        fs::write(
            temp.path().join(".toolenv/config.yml"),
            "fundamental_dir: /opt/fw\nverify:\n  interpreter: python3\n",
        )
        .unwrap();

        let args = ActivateArgs {
            fundamental_dir: None,
            ..linux_args()
        };
        let mut ui = MockUI::new();
        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();
        assert!(ui
            .emitted()
            .contains("python3 \"/opt/fw/RepositoryBootstrap/SetupAndActivate/AcquireBinaries.py\""));
    }

    #[test]
    fn missing_install_warns_and_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let err = ActivateCommand::new(temp.path(), linux_args())
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, ToolenvError::MissingDirectory { .. }));
        assert!(ui.emitted().is_empty());
        assert!(ui.warnings().iter().any(|w| w.contains("--fast")));
    }

    #[test]
    fn fast_activation_skips_checks() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = ActivateArgs {
            fast: true,
            fundamental_dir: None,
            ..linux_args()
        };

        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.emitted().contains("echo \"** FAST: Activating without verifying content."));
    }

    #[test]
    fn non_linux_platform_renders_empty_script() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = ActivateArgs {
            platform: Some(HostPlatform::Windows),
            shell: Some(ShellFamily::Batch),
            ..Default::default()
        };

        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.emitted(), "@echo off\n");
    }

    #[test]
    fn writes_output_file() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        let out = temp.path().join("activate.sh");
        let args = ActivateArgs {
            output: Some(out.clone()),
            ..linux_args()
        };
        let mut ui = MockUI::new();

        ActivateCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.emitted().is_empty());
        assert!(fs::read_to_string(&out).unwrap().contains("export CC=\"gcc\""));
        assert!(ui.successes()[0].contains("5 activation actions"));
    }

    #[test]
    fn verbose_lists_action_kinds() {
        let temp = TempDir::new().unwrap();
        install_gcc(temp.path());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        ActivateCommand::new(temp.path(), linux_args())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages().len(), 5);
        assert_eq!(ui.messages()[4], "  augment");
    }
}
