//! # Directory-Level Checks
//!
//! The library root and every title directory are checked the same way,
//! in the same order:
//!
//! | step | check |
//! |------|-------|
//! | 1 | the directory exists |
//! | 2 | it holds `index.json` |
//! | 3 | `index.json` is well-formed JSON |
//! | 4 | `index.json` satisfies the manifest schema |
//! | 5 | every subdirectory is declared in the manifest |
//! | 6 | every regular file is an expected file |
//!
//! A [`Level`] supplies what differs: the check codes (`1`..`6` at the
//! root, `7.1`..`7.6` for titles), the noun used in messages, and the files
//! allowed at that level.

use std::path::{Path, MAIN_SEPARATOR};

use okuma_core::{CheckCode, ErrorPath, Failure};
use okuma_schema::registry::{LIBRARY_EXPECTED_FILES, MANIFEST_FILE, TITLE_EXPECTED_FILES};
use okuma_schema::{Manifest, Schema};
use serde_json::Value;

use crate::error::CheckError;
use crate::report::format_list;

/// One level of the library tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    noun: &'static str,
    parent: Option<CheckCode>,
    expected_files: &'static [&'static str],
}

impl Level {
    /// The library root.
    pub const LIBRARY: Level = Level {
        noun: "library",
        parent: None,
        expected_files: LIBRARY_EXPECTED_FILES,
    };

    /// A title directory, checked as sub-steps of `parent`.
    pub const fn title(parent: CheckCode) -> Level {
        Level {
            noun: "title",
            parent: Some(parent),
            expected_files: TITLE_EXPECTED_FILES,
        }
    }

    /// The code of `step` at this level.
    pub fn code(&self, step: u8) -> CheckCode {
        match self.parent {
            Some(parent) => parent.sub(step),
            None => CheckCode::new(step),
        }
    }

    /// Files allowed at this level.
    pub fn expected_files(&self) -> &'static [&'static str] {
        self.expected_files
    }

    fn fail(&self, step: u8, at: ErrorPath, message: impl Into<String>) -> CheckError {
        CheckError::Failed(Failure::new(self.code(step), at, message))
    }

    fn passed(&self, step: u8, at: &ErrorPath) {
        tracing::debug!(code = %self.code(step), path = %at, "check passed");
    }
}

/// Render `dir` with exactly one trailing separator.
pub(crate) fn display_dir(dir: &Path) -> String {
    let shown = dir.display().to_string();
    let trimmed = shown.trim_end_matches(std::path::is_separator);
    format!("{trimmed}{MAIN_SEPARATOR}")
}

/// Subdirectory and regular file names of a directory, each sorted.
///
/// Entries that are neither (dangling symlinks, sockets) are ignored.
/// Symlinks count as what they point to.
#[derive(Debug, Default)]
pub(crate) struct Entries {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

pub(crate) fn list_entries(dir: &Path) -> Result<Entries, CheckError> {
    let mut entries = Entries::default();
    for entry in std::fs::read_dir(dir).map_err(CheckError::io(dir))? {
        let entry = entry.map_err(CheckError::io(dir))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            entries.dirs.push(name);
        } else if path.is_file() {
            entries.files.push(name);
        }
    }
    entries.dirs.sort();
    entries.files.sort();
    Ok(entries)
}

/// Run steps 1 to 6 on `dir` and return its decoded manifest.
///
/// # Errors
///
/// [`CheckError::Failed`] with the first violated step, or an operational
/// error from the filesystem or the decoder.
pub(crate) fn check_directory<M: Manifest>(
    level: &Level,
    dir: &Path,
    at: &ErrorPath,
) -> Result<M, CheckError> {
    if !dir.is_dir() {
        return Err(level.fail(
            1,
            at.clone(),
            format!(
                "The given {} ({}) doesn't exist",
                level.noun,
                display_dir(dir)
            ),
        ));
    }
    level.passed(1, at);

    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest_at = at.child(MANIFEST_FILE);
    let manifest = read_manifest::<M>(level, &manifest_path, &manifest_at)?;

    let entries = list_entries(dir)?;

    let unexpected_dirs: Vec<&String> = entries
        .dirs
        .iter()
        .filter(|name| !manifest.declares(name))
        .collect();
    if !unexpected_dirs.is_empty() {
        return Err(level.fail(
            5,
            at.clone(),
            format!(
                "Other folders than the ones listed as '{}' in '{}' are not allowed ({} was unexpected)",
                M::CHILD_FIELD,
                MANIFEST_FILE,
                format_list(unexpected_dirs.as_slice())
            ),
        ));
    }
    level.passed(5, at);

    let unexpected_files: Vec<&String> = entries
        .files
        .iter()
        .filter(|name| !level.expected_files().contains(&name.as_str()))
        .collect();
    if !unexpected_files.is_empty() {
        return Err(level.fail(
            6,
            at.clone(),
            format!(
                "Additional files are not allowed ({} was unexpected)",
                format_list(unexpected_files.as_slice())
            ),
        ));
    }
    level.passed(6, at);

    Ok(manifest)
}

/// Steps 2 to 4: presence, well-formedness, schema compliance.
fn read_manifest<M: Manifest>(
    level: &Level,
    path: &Path,
    at: &ErrorPath,
) -> Result<M, CheckError> {
    if !path.is_file() {
        return Err(level.fail(2, at.clone(), "is missing"));
    }
    level.passed(2, at);

    let bytes = std::fs::read(path).map_err(CheckError::io(path))?;
    let document: Value = match serde_json::from_slice(&bytes) {
        Ok(document) => document,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "manifest is not JSON");
            return Err(level.fail(3, at.clone(), "is not a valid JSON file"));
        }
    };
    level.passed(3, at);

    check_document(level.code(4), at, &document, M::schema()).map_err(CheckError::Failed)?;
    level.passed(4, at);

    serde_json::from_value(document).map_err(|source| CheckError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate `document` against `schema` as check `code`.
///
/// The failure is located at `at` joined with the path of the offending
/// value inside the document, and carries the violation message.
///
/// # Errors
///
/// The first schema violation, as a [`Failure`].
pub fn check_document(
    code: CheckCode,
    at: &ErrorPath,
    document: &Value,
    schema: &Schema,
) -> Result<(), Failure> {
    schema.validate(document).map_err(|violation| {
        tracing::debug!(kind = %violation.kind, path = %violation.path, "schema violation");
        Failure::new(code, at.join(&violation.path), violation.message)
    })
}
