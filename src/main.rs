//! setupcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use setupcheck::cli::{CheckCommand, Cli, Command};
use setupcheck::ui::{should_use_colors, TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never interleave with the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("setupcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("setupcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("setupcheck starting with args: {:?}", cli);

    let mut ui = TerminalUI::new(should_use_colors(cli.no_color));

    let result = CheckCommand::from_cli(&cli).and_then(|command| command.execute(&mut ui));

    match result {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
