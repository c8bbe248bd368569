//! Netmatrix CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use netmatrix::cli::{Cli, MatrixCommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout and the output file stay clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("netmatrix=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("netmatrix=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Netmatrix starting with args: {:?}", cli);

    let result = MatrixCommand::from_cli(&cli)
        .execute()
        .with_context(|| format!("Failed to generate build matrix for {}", cli.git_ref));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
