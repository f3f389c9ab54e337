//! # Library Checker
//!
//! Entry point of the linter. Runs checks 1 to 6 on the library root, then
//! check 7: every declared title, in declaration order, through the
//! [title checker](crate::title::check_title). The first failure anywhere
//! in the tree ends the run.

use std::io::Write;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use okuma_core::{CheckCode, ErrorPath, Failure};
use okuma_schema::LibraryIndex;

use crate::directory::{check_directory, Level};
use crate::error::CheckError;
use crate::report::{report, report_to};
use crate::title::check_title;

/// Root breadcrumb of every failure path.
pub const LIBRARY_SEGMENT: &str = "Library";

/// Check code under which titles are checked.
pub const TITLES_CHECK: CheckCode = CheckCode::new(7);

/// Return `root` with exactly one trailing separator.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn normalize_root(root: &Path) -> PathBuf {
    match root.to_str() {
        Some(raw) => {
            let trimmed = raw.trim_end_matches(std::path::is_separator);
            PathBuf::from(format!("{trimmed}{MAIN_SEPARATOR}"))
        }
        None => root.to_path_buf(),
    }
}

/// Check the library at `root`, returning the first failure as
/// [`CheckError::Failed`] without printing it.
///
/// # Errors
///
/// [`CheckError::Failed`] if the library violates the contract, or an
/// operational error.
pub fn verify_library(root: impl AsRef<Path>) -> Result<LibraryIndex, CheckError> {
    let root = normalize_root(root.as_ref());
    let at = ErrorPath::root(LIBRARY_SEGMENT);

    tracing::debug!(root = %root.display(), "checking library");
    let index: LibraryIndex = check_directory(&Level::LIBRARY, &root, &at)?;

    for slug in &index.titles {
        check_title(TITLES_CHECK, &root, &at, slug)?;
    }

    tracing::info!(
        root = %root.display(),
        titles = index.titles.len(),
        "library passed"
    );
    Ok(index)
}

/// Check the library at `root` and print the failure, if any, on stdout.
///
/// Returns `Ok(true)` when the library conforms (nothing is printed) and
/// `Ok(false)` when a check failed.
///
/// # Errors
///
/// Operational errors only. Check failures are reported, not returned.
pub fn check_library(root: impl AsRef<Path>) -> Result<bool, CheckError> {
    Ok(match first_failure(root.as_ref())? {
        Some(failure) => report(&failure),
        None => true,
    })
}

/// Like [`check_library`], writing the failure line to `out`.
///
/// # Errors
///
/// Operational errors, including failure to write to `out`.
pub fn check_library_to<W: Write>(root: impl AsRef<Path>, out: &mut W) -> Result<bool, CheckError> {
    let root = root.as_ref();
    match first_failure(root)? {
        Some(failure) => report_to(out, &failure).map_err(CheckError::io(root)),
        None => Ok(true),
    }
}

/// Split the outcome of [`verify_library`] into verdict and operational error.
fn first_failure(root: &Path) -> Result<Option<Failure>, CheckError> {
    match verify_library(root) {
        Ok(_) => Ok(None),
        Err(CheckError::Failed(failure)) => {
            tracing::info!(code = %failure.code, "library failed");
            Ok(Some(failure))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_single_separator() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(normalize_root(Path::new("lib")), PathBuf::from(format!("lib{sep}")));
        assert_eq!(
            normalize_root(Path::new(&format!("lib{sep}{sep}{sep}"))),
            PathBuf::from(format!("lib{sep}"))
        );
        assert_eq!(
            normalize_root(Path::new(&format!("a{sep}b{sep}"))),
            PathBuf::from(format!("a{sep}b{sep}"))
        );
    }

    #[test]
    fn check_library_reports_failure_as_false() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!check_library(dir.path()).unwrap());
    }

    #[test]
    fn check_library_passes_conforming_library() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.json"),
            br#"{"version": "2.0", "titles": []}"#,
        )
        .unwrap();
        assert!(check_library(dir.path()).unwrap());
    }

    #[test]
    fn missing_root_fails_check_one() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-library");
        let err = verify_library(&missing).unwrap_err();
        let failure = err.failure().unwrap();
        assert_eq!(failure.code, CheckCode::new(1));
        assert_eq!(failure.path.segments(), [LIBRARY_SEGMENT]);
        assert_eq!(
            failure.message,
            format!(
                "The given library ({}{MAIN_SEPARATOR}) doesn't exist",
                missing.display()
            )
        );
    }
}
