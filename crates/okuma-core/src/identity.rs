//! # Slug Identifiers
//!
//! Titles and volumes are addressed by slugs: the name of their directory
//! and the entry listing them in the parent `index.json`. A slug is made of
//! lowercase alphanumeric words separated by single dashes.
//!
//! The pattern is exported so the schema registry checks documents with
//! exactly the same rule the [`Slug`] constructor enforces.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Regular expression every slug must match in full.
pub const SLUG_PATTERN: &str = "^[a-z0-9]+(?:-[a-z0-9]+)*$";

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern is a valid regex"));

/// Returns true if `s` is a properly formatted slug.
pub fn is_slug(s: &str) -> bool {
    SLUG_RE.is_match(s)
}

/// A validated title or volume identifier, e.g. `one-piece` or `vol-01`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSlug`] if `value` does not match
    /// [`SLUG_PATTERN`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_slug(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidSlug(value))
        }
    }

    /// Access the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
