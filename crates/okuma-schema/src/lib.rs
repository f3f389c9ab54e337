//! # okuma-schema — Manifest Schemas and Validation
//!
//! Declares what a well-formed `index.json` looks like, at the library root
//! and inside each title, and checks parsed documents against it.
//!
//! ## Validation (`validate`)
//!
//! Schemas are data built from composable rules: type, enum, pattern,
//! object shape and array-of. [`Schema::validate`] returns the first
//! [`Violation`] with its instance path and a message, custom when the
//! failing schema declares one for that [`ViolationKind`].
//!
//! ## Registry (`registry`)
//!
//! The contract itself: [`registry::library_index`],
//! [`registry::title_index`], their shared field types, and the files each
//! directory level may hold.
//!
//! ## Documents (`document`)
//!
//! Typed [`LibraryIndex`] and [`TitleIndex`] models, decoded only once a
//! document passed its schema.
//!
//! ## Crate Policy
//!
//! - Depends only on `okuma-core` internally.
//! - No filesystem access. Callers read and parse; this crate judges.

pub mod document;
pub mod registry;
pub mod validate;

pub use document::{Credit, LibraryIndex, Link, Manifest, TitleIndex, TitleStatus};
pub use validate::{MessageFn, ObjectShape, Schema, Violation, ViolationKind};
