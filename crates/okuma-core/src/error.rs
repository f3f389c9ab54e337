//! # Error Types
//!
//! Errors raised while constructing core primitives. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Check failures are not errors in this sense: they are values of type
//! [`Failure`](crate::Failure), produced and reported by the check layer.

use thiserror::Error;

/// Rejection of a value handed to a validated constructor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a slug (`^[a-z0-9]+(-[a-z0-9]+)*$`).
    #[error("'{0}' is not a properly formatted slug")]
    InvalidSlug(String),
}
