//! # Reporter
//!
//! The only output of a failing run is one line:
//!
//! ```text
//! [FAILED Check 6] [Library] Additional files are not allowed ('notes.txt' was unexpected)
//! ```
//!
//! A passing run prints nothing.

use std::io::{self, Write};

use okuma_core::Failure;

/// Print `failure` on stdout. Always returns `false`, the failed verdict.
pub fn report(failure: &Failure) -> bool {
    println!("{failure}");
    false
}

/// Write `failure` as a single line to `out`. Returns the failed verdict.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn report_to<W: Write>(out: &mut W, failure: &Failure) -> io::Result<bool> {
    writeln!(out, "{failure}")?;
    Ok(false)
}

/// Quote and join names for a failure message: `'a'`, `'a', and 'b'`,
/// `'a', 'b', and 'c'`.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((only, [])) => format!("'{}'", only.as_ref()),
        Some((last, rest)) => {
            let head: Vec<&str> = rest.iter().map(|item| item.as_ref()).collect();
            format!("'{}', and '{}'", head.join("', '"), last.as_ref())
        }
    }
}
