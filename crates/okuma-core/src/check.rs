//! # Check Codes and Failures
//!
//! Every check the linter performs has a stable code. Library-level checks
//! are numbered 1 to 7; the checks run on each title are sub-steps of
//! library check 7 (`7.1` to `7.6`), so a title failure is never confused
//! with the library check of the same rank.

use std::fmt;

use crate::path::ErrorPath;

/// Identifier of a single check, e.g. `4` or `7.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckCode {
    step: u8,
    sub_step: Option<u8>,
}

impl CheckCode {
    /// A top-level check code.
    pub const fn new(step: u8) -> Self {
        Self {
            step,
            sub_step: None,
        }
    }

    /// The code of sub-step `sub_step` of this check.
    #[must_use]
    pub const fn sub(self, sub_step: u8) -> Self {
        Self {
            step: self.step,
            sub_step: Some(sub_step),
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_step {
            Some(sub) => write!(f, "{}.{}", self.step, sub),
            None => write!(f, "{}", self.step),
        }
    }
}

/// The first violated check of a run.
///
/// Displays as the single line the linter prints:
/// `[FAILED Check 7.4] [Library -> one-piece -> index.json -> status] ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Code of the check that failed.
    pub code: CheckCode,
    /// Where the violation was found.
    pub path: ErrorPath,
    /// Human-readable description.
    pub message: String,
}

impl Failure {
    pub fn new(code: CheckCode, path: ErrorPath, message: impl Into<String>) -> Self {
        Self {
            code,
            path,
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[FAILED Check {}] [{}] {}",
            self.code, self.path, self.message
        )
    }
}

impl std::error::Error for Failure {}
