//! compose-resolve - resolve compose project inputs from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Capture the process environment once and hand it to the resolver.
//! - Print the requested view of the resolved project.
//!
//! Does NOT handle:
//! - Resolution rules (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Failures exit with a structured code (see `error` module).

mod args;
mod dispatch;
mod error;
mod formatters;
mod loader;

use std::io::Write;

use args::Cli;
use clap::Parser;
use compose_config::EnvSnapshot;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run_command(cli, EnvSnapshot::capture()) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            match stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    eprintln!("Failed to write output: {}", e);
                    ExitCode::GeneralError
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}
