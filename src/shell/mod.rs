//! Shell actions, platform detection and script rendering.

pub mod action;
pub mod platform;
pub mod render;

pub use action::ActivationAction;
pub use platform::{HostPlatform, ShellFamily};
pub use render::{
    escape_bash, renderer_for, BashRenderer, BatchRenderer, PowerShellRenderer, ShellRenderer,
};
