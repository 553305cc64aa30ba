//! shipcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use shipcheck::cli::{Cli, CommandDispatcher};
use shipcheck::ui::{should_use_colors, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code when the tool itself cannot run.
const TOOL_ERROR_EXIT: u8 = 3;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--verbose` flag sets level to INFO
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN
///
/// Logs go to stderr; stdout carries only the report.
fn init_tracing(debug: bool, verbose: bool) {
    let filter = if debug {
        EnvFilter::new("shipcheck=debug")
    } else if verbose {
        EnvFilter::new("shipcheck=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shipcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug, cli.verbose);

    tracing::debug!("shipcheck starting with args: {:?}", cli);

    let use_color = !cli.no_color && should_use_colors();

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = TerminalUI::new(use_color);

    let dispatcher = CommandDispatcher::new(project_root)
        .with_config(cli.config.clone())
        .with_color(use_color);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(TOOL_ERROR_EXIT)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(TOOL_ERROR_EXIT)
        }
    }
}
