//! # okuma CLI entry point
//!
//! Parses arguments, sets up logging and runs the lint.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use okuma_cli::lint::{run_lint, LintArgs};

/// Okuma library linter.
///
/// Checks a library directory and its index.json manifests, printing the
/// first violation found.
#[derive(Parser, Debug)]
#[command(name = "okuma", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    lint: LintArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "okuma starting");

    match run_lint(&cli.lint) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
