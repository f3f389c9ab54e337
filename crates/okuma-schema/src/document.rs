//! # Manifest Documents
//!
//! Typed views of the two `index.json` kinds. A manifest is first checked
//! against its schema as a raw [`serde_json::Value`], so violations can be
//! located and worded precisely; only a document that passed is decoded
//! into these types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use okuma_core::Slug;

use crate::registry;
use crate::validate::Schema;

/// A manifest kind with a registered schema.
pub trait Manifest: DeserializeOwned {
    /// The schema a raw document must satisfy before decoding.
    fn schema() -> &'static Schema;

    /// Name of the field listing the entries this manifest declares,
    /// e.g. `titles`.
    const CHILD_FIELD: &'static str;

    /// Declared entries, in declaration order.
    fn children(&self) -> &[Slug];

    /// Returns true if `name` is a declared entry.
    fn declares(&self, name: &str) -> bool {
        self.children().iter().any(|child| child.as_str() == name)
    }
}

/// The library root `index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryIndex {
    pub version: String,
    /// Titles in the order they are checked.
    pub titles: Vec<Slug>,
}

impl Manifest for LibraryIndex {
    const CHILD_FIELD: &'static str = "titles";

    fn schema() -> &'static Schema {
        registry::library_index()
    }

    fn children(&self) -> &[Slug] {
        &self.titles
    }
}

/// Publication status of a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl TitleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for TitleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credit {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub title: String,
    pub url: String,
}

/// A title's `index.json`.
///
/// `pretitle`, `subtitle` and `serialization` default to the empty string;
/// absent lists default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleIndex {
    pub version: String,
    #[serde(default)]
    pub pretitle: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: String,
    /// Volumes in declaration order.
    pub volumes: Vec<Slug>,
    pub status: TitleStatus,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub serialization: String,
    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Manifest for TitleIndex {
    const CHILD_FIELD: &'static str = "volumes";

    fn schema() -> &'static Schema {
        registry::title_index()
    }

    fn children(&self) -> &[Slug] {
        &self.volumes
    }
}
