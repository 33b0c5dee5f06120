//! Host platform and shell family detection.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Operating system category an activation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum HostPlatform {
    Linux,
    #[value(name = "macos")]
    MacOS,
    Windows,
}

impl HostPlatform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            HostPlatform::MacOS
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else {
            HostPlatform::Linux
        }
    }

    /// Category name, also used as the platform subdirectory of installed tools.
    pub fn category_name(&self) -> &'static str {
        match self {
            HostPlatform::Linux => "Linux",
            HostPlatform::MacOS => "MacOS",
            HostPlatform::Windows => "Windows",
        }
    }

    /// Shell family scripts are rendered for when none is requested.
    pub fn default_shell(&self) -> ShellFamily {
        match self {
            HostPlatform::Linux | HostPlatform::MacOS => ShellFamily::Bash,
            HostPlatform::Windows => ShellFamily::Batch,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category_name())
    }
}

/// Shell families an activation script can be rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum ShellFamily {
    Bash,
    Batch,
    #[value(name = "powershell")]
    PowerShell,
}

impl ShellFamily {
    /// Parse shell family from executable name.
    pub fn from_executable(exe: &str) -> Option<Self> {
        let name = Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" | "zsh" | "sh" => Some(ShellFamily::Bash),
            "cmd" => Some(ShellFamily::Batch),
            "powershell" | "pwsh" => Some(ShellFamily::PowerShell),
            _ => None,
        }
    }

    /// Detect the shell family from the environment, falling back to the
    /// platform default.
    pub fn detect(platform: HostPlatform) -> Self {
        let exe = if platform == HostPlatform::Windows {
            std::env::var("COMSPEC").ok()
        } else {
            std::env::var("SHELL").ok()
        };

        exe.as_deref()
            .and_then(Self::from_executable)
            .unwrap_or_else(|| platform.default_shell())
    }

    /// Separator used between entries of path-list variables.
    pub fn path_separator(&self) -> char {
        match self {
            ShellFamily::Bash => ':',
            ShellFamily::Batch | ShellFamily::PowerShell => ';',
        }
    }
}
