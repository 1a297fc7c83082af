//! Handwriting CLI - Main Entry Point
//!
//! Resolves connection settings from flags and the environment, then runs
//! one command against the handwriting service.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            for detail in e.details() {
                eprintln!("  {detail}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn execute(cli: Cli) -> Result<(), CliError> {
    let config = cli.connection.resolve()?;
    debug!(service = %config.service, "resolved configuration");
    let client = config.connect()?;
    commands::run(&client, cli.command).await
}

/// Logs go to stderr so rendered output can be piped from stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
