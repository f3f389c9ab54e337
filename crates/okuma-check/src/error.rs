//! # Check Errors
//!
//! Besides success, a check run stops on a violated check (the expected
//! outcome for a broken library) or on an operational error the linter
//! does not model, such as a permission error while listing a directory.
//! Only a violated check is ever reported as a check failure.

use std::path::{Path, PathBuf};

use okuma_core::Failure;
use thiserror::Error;

/// Why a check run stopped.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A check failed. This is the linter's verdict, not a malfunction.
    #[error(transparent)]
    Failed(#[from] Failure),

    /// Filesystem access failed outside the modelled "missing" cases.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest passed its schema but could not be decoded.
    #[error("cannot decode {} after schema validation: {source}", path.display())]
    Decode {
        /// The manifest file.
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CheckError {
    /// The failed check, if the run stopped on a verdict.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub(crate) fn io(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
