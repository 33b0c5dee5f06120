//! Rendering of activation actions into shell syntax.
//!
//! Each shell family gets its own [`ShellRenderer`]. Renderers are pure:
//! they produce text and never touch the process environment.

use super::action::ActivationAction;
use super::platform::ShellFamily;

/// Converts abstract actions into statements for one shell family.
pub trait ShellRenderer {
    /// The family this renderer targets.
    fn family(&self) -> ShellFamily;

    /// First line of a generated script.
    fn header(&self) -> &'static str;

    /// Render a message.
    fn message(&self, text: &str) -> String;

    /// Render a command to run.
    fn execute(&self, command: &str) -> String {
        command.to_string()
    }

    /// Render a variable assignment.
    fn set(&self, name: &str, value: &str) -> String;

    /// Render the addition of one value to a path-list variable, skipped
    /// when the variable already contains it.
    fn augment_one(&self, name: &str, value: &str) -> String;

    /// Render a single action, one statement per line.
    fn render(&self, action: &ActivationAction) -> String {
        match action {
            ActivationAction::Message { text } => self.message(text),
            ActivationAction::Execute { command } => self.execute(command),
            ActivationAction::Set { name, value } => self.set(name, value),
            ActivationAction::Augment { name, values } => values
                .iter()
                .map(|v| self.augment_one(name, v))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Render a complete script: header followed by every action.
    fn render_script(&self, actions: &[ActivationAction]) -> String {
        let mut lines = vec![self.header().to_string()];
        lines.extend(actions.iter().map(|a| self.render(a)));
        let mut script = lines.join("\n");
        script.push('\n');
        script
    }
}

/// Get the renderer for a shell family.
pub fn renderer_for(family: ShellFamily) -> Box<dyn ShellRenderer> {
    match family {
        ShellFamily::Bash => Box::new(BashRenderer),
        ShellFamily::Batch => Box::new(BatchRenderer),
        ShellFamily::PowerShell => Box::new(PowerShellRenderer),
    }
}

/// Bash (and POSIX-compatible) renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BashRenderer;

impl ShellRenderer for BashRenderer {
    fn family(&self) -> ShellFamily {
        ShellFamily::Bash
    }

    fn header(&self) -> &'static str {
        "#!/usr/bin/env bash"
    }

    fn message(&self, text: &str) -> String {
        format!("echo \"{}\"", escape_bash(text))
    }

    fn set(&self, name: &str, value: &str) -> String {
        format!("export {}=\"{}\"", name, escape_bash(value))
    }

    fn augment_one(&self, name: &str, value: &str) -> String {
        let value = escape_bash(value);
        let sep = self.family().path_separator();
        format!(
            "if [[ \"{sep}${{{name}}}{sep}\" != *\"{sep}{value}{sep}\"* ]]; then export {name}=\"${{{name}:+${{{name}}}{sep}}}{value}\"; fi",
            name = name,
            value = value,
            sep = sep
        )
    }
}

/// Windows `cmd.exe` renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRenderer;

impl ShellRenderer for BatchRenderer {
    fn family(&self) -> ShellFamily {
        ShellFamily::Batch
    }

    fn header(&self) -> &'static str {
        "@echo off"
    }

    fn message(&self, text: &str) -> String {
        if text.is_empty() {
            "echo.".to_string()
        } else {
            format!("echo {}", escape_batch(text))
        }
    }

    fn set(&self, name: &str, value: &str) -> String {
        format!("set \"{}={}\"", name, value.replace('%', "%%"))
    }

    fn augment_one(&self, name: &str, value: &str) -> String {
        let value = value.replace('%', "%%");
        let sep = self.family().path_separator();
        format!(
            "if not defined {name} (set \"{name}={value}\") else (echo \"{sep}%{name}%{sep}\" | findstr /I /C:\"{sep}{value}{sep}\" >nul || set \"{name}=%{name}%{sep}{value}\")",
            name = name,
            value = value,
            sep = sep
        )
    }
}

/// PowerShell renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerShellRenderer;

impl ShellRenderer for PowerShellRenderer {
    fn family(&self) -> ShellFamily {
        ShellFamily::PowerShell
    }

    fn header(&self) -> &'static str {
        "# PowerShell activation"
    }

    fn message(&self, text: &str) -> String {
        format!("Write-Host \"{}\"", escape_powershell(text))
    }

    fn set(&self, name: &str, value: &str) -> String {
        format!("$env:{} = \"{}\"", name, escape_powershell(value))
    }

    fn augment_one(&self, name: &str, value: &str) -> String {
        let value = escape_powershell(value);
        let sep = self.family().path_separator();
        format!(
            "if (-not (\"{sep}$env:{name}{sep}\".Contains(\"{sep}{value}{sep}\"))) {{ $env:{name} = (@($env:{name}, \"{value}\") | Where-Object {{ $_ }}) -join \"{sep}\" }}",
            name = name,
            value = value,
            sep = sep
        )
    }
}

/// Escape text for a double-quoted bash string.
pub fn escape_bash(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape text for an unquoted `echo` in cmd.exe.
fn escape_batch(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' => out.push_str("%%"),
            '^' | '&' | '|' | '<' | '>' | '(' | ')' => {
                out.push('^');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted PowerShell string.
fn escape_powershell(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '`' | '"' | '$') {
            out.push('`');
        }
        out.push(c);
    }
    out
}
