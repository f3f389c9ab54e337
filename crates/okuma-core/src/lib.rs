//! # okuma-core — Foundational Types for the Okuma Library Linter
//!
//! This crate defines the small set of primitives every other crate in the
//! workspace speaks in. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** Title and volume names are
//!    [`Slug`]s with a validated constructor. No bare strings once a
//!    manifest has been accepted.
//!
//! 2. **Immutable breadcrumbs.** [`ErrorPath`] is extended by value as
//!    validation descends. Callees never mutate their caller's path.
//!
//! 3. **One failure per run.** A [`Failure`] carries the [`CheckCode`], the
//!    breadcrumb and the message of the first violated check. There is no
//!    collection type for failures.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `okuma-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests. The one `expect` compiles
//!   the constant slug pattern.

pub mod check;
pub mod error;
pub mod identity;
pub mod path;

// Re-export primary types for ergonomic imports.
pub use check::{CheckCode, Failure};
pub use error::ValidationError;
pub use identity::{is_slug, Slug, SLUG_PATTERN};
pub use path::ErrorPath;
