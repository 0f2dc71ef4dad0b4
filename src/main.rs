use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod discord;
mod error;
mod platform;
mod slack;
mod telegram;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Logging disabled: {e:?}");
    }

    match cli.run() {
        Ok(platform) => {
            println!("Message sent to {platform}!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}

/// `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        // Only our own events: dependency logs may carry the request URL
        Err(_) if verbose => EnvFilter::new("warn,messenger=debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Unable to install tracing subscriber")
}
