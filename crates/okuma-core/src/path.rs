//! # Error Paths
//!
//! Breadcrumbs locating a failure inside the library: directory names on
//! the way down, then the manifest filename, then the JSON keys and array
//! indices inside that manifest. Rendered as `Library -> one-piece ->
//! index.json -> status`.

use std::fmt;

/// An ordered list of location segments.
///
/// Extending a path returns a new value; the receiver is left untouched, so
/// a checker can hand its own path to any number of children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorPath {
    segments: Vec<String>,
}

impl ErrorPath {
    /// The empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// A path holding a single segment.
    pub fn root(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Returns a copy of this path with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Returns a copy of this path with every segment of `tail` appended.
    #[must_use]
    pub fn join(&self, tail: &ErrorPath) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(tail.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl<S: Into<String>> FromIterator<S> for ErrorPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
