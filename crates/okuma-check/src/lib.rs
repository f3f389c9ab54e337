//! # okuma-check — Library Tree Checks
//!
//! Walks an Okuma library and checks it against the manifest contract,
//! stopping at the first violation.
//!
//! ## Check Order
//!
//! | code | check |
//! |------|-------|
//! | 1 | library root exists |
//! | 2 | root `index.json` exists |
//! | 3 | root `index.json` is valid JSON |
//! | 4 | root `index.json` satisfies the library schema |
//! | 5 | every root subdirectory is a declared title |
//! | 6 | the only root file is `index.json` |
//! | 7.1 – 7.6 | the same six checks on each declared title, in order |
//!
//! ## Entry Points
//!
//! - [`check_library`]: check and print the failure line, if any.
//! - [`verify_library`]: check and return the [`Failure`](okuma_core::Failure)
//!   inside [`CheckError::Failed`] instead of printing it.
//! - [`check_title`]: check a single title directory.
//! - [`check_document`]: check one parsed manifest against a schema.
//!
//! ## Crate Policy
//!
//! - Synchronous `std::fs` only; each run is self-contained.
//! - Exactly one failure per run. Operational I/O errors are returned as
//!   errors, never dressed up as check failures.

pub mod directory;
pub mod error;
pub mod library;
pub mod report;
pub mod title;

pub use directory::{check_document, Level};
pub use error::CheckError;
pub use library::{check_library, check_library_to, normalize_root, verify_library};
pub use report::{format_list, report, report_to};
pub use title::check_title;
