//! toolenv CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use toolenv::cli::{Cli, CommandDispatcher};
use toolenv::config::find_repo_root;
use toolenv::ui::{OutputMode, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the generated script.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("toolenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toolenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("toolenv starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let repo_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_repo_root(&cwd).unwrap_or(cwd)
    });

    let mut ui = TerminalUI::new(OutputMode::from_flags(cli.verbose, cli.quiet));
    let dispatcher = CommandDispatcher::new(repo_root);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
