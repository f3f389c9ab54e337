//! # Title Checker
//!
//! Validates one title directory of a library: the directory itself, its
//! `index.json`, and the volumes and files it holds. Check codes are
//! sub-steps of the library check that delegated to it.

use std::path::Path;

use okuma_core::{CheckCode, ErrorPath, Slug};
use okuma_schema::TitleIndex;

use crate::directory::{check_directory, Level};
use crate::error::CheckError;

/// Check the title `slug` inside `library_root`.
///
/// `parent` is the breadcrumb of the library; failures are located under
/// `parent -> slug`. Check codes are `code.1` to `code.6`.
///
/// # Errors
///
/// [`CheckError::Failed`] with the first violated check, or an operational
/// error.
pub fn check_title(
    code: CheckCode,
    library_root: &Path,
    parent: &ErrorPath,
    slug: &Slug,
) -> Result<TitleIndex, CheckError> {
    let dir = library_root.join(slug.as_str());
    let at = parent.child(slug.as_str());

    tracing::debug!(title = %slug, "checking title");
    let index: TitleIndex = check_directory(&Level::title(code), &dir, &at)?;
    tracing::debug!(
        title = %slug,
        status = %index.status,
        volumes = index.volumes.len(),
        "title passed"
    );
    Ok(index)
}
