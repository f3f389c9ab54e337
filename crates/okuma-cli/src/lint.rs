//! # Lint Command
//!
//! Checks one library directory and prints its failure line, if any.
//!
//! The exit code does not carry the verdict: a failing library is a
//! successful run that printed a failure. Only operational errors exit
//! non-zero.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use okuma_check::check_library_to;

/// Printed when no library path is given.
pub const USAGE_HINT: &str =
    "Please provide the path to your Okuma library as an argument (i.e: okuma ./library/).";

/// Arguments of the `okuma` command.
#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// Path to the library root directory.
    #[arg(value_name = "LIBRARY")]
    pub library: Option<PathBuf>,
}

/// Run the lint against stdout. Returns the process exit code.
///
/// # Errors
///
/// Operational errors: unreadable directories, failed writes.
pub fn run_lint(args: &LintArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_lint_to(args, &mut out)
}

/// Like [`run_lint`], writing the usage hint or failure line to `out`.
///
/// # Errors
///
/// Operational errors: unreadable directories, failed writes.
pub fn run_lint_to<W: Write>(args: &LintArgs, out: &mut W) -> Result<u8> {
    let Some(library) = args.library.as_deref() else {
        writeln!(out, "{USAGE_HINT}").context("failed to print usage hint")?;
        return Ok(0);
    };

    let passed = check_library_to(library, out)
        .with_context(|| format!("failed to check library {}", library.display()))?;
    tracing::debug!(passed, "lint finished");
    Ok(0)
}
