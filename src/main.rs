//! Gauntlet CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gauntlet::cli::{Cli, CommandDispatcher};
use gauntlet::store::FileMedium;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gauntlet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gauntlet=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Gauntlet starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine data directory
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(FileMedium::default_dir);

    let dispatcher = CommandDispatcher::new(data_dir);
    match dispatcher.dispatch(&cli) {
        Ok(result) => {
            if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(result.exit_code as u8)
            }
        }
        Err(e) => {
            eprintln!("{}", console::style(format!("Error: {}", e)).red());
            ExitCode::FAILURE
        }
    }
}
