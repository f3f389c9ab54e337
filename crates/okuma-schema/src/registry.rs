//! # Schema Registry
//!
//! The library contract, version 2.0: the shared field types and the two
//! manifest schemas built from them, plus the filenames each directory
//! level is allowed to hold.
//!
//! Document schemas are built once on first use and shared for the rest of
//! the process.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use okuma_core::SLUG_PATTERN;

use crate::validate::{ObjectShape, Schema, ViolationKind};

/// Manifest filename at every directory level.
pub const MANIFEST_FILE: &str = "index.json";

/// Optional cover image inside a title directory.
pub const THUMBNAIL_FILE: &str = "thumbnail.jpg";

/// The only manifest version this contract accepts.
pub const SUPPORTED_VERSION: &str = "2.0";

/// Regular files allowed at the library root.
pub const LIBRARY_EXPECTED_FILES: &[&str] = &[MANIFEST_FILE];

/// Regular files allowed inside a title directory.
pub const TITLE_EXPECTED_FILES: &[&str] = &[MANIFEST_FILE, THUMBNAIL_FILE];

/// Allowed values of a title's `status`.
pub const TITLE_STATUSES: &[&str] = &["upcoming", "ongoing", "completed", "cancelled"];

const VERSIONS: &[&str] = &[SUPPORTED_VERSION];

// Any character, newlines included: rejects only "".
const NON_EMPTY_PATTERN: &str = "(?s).";

static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern is a valid regex"));

static NON_EMPTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(NON_EMPTY_PATTERN).expect("non-empty pattern is a valid regex"));

static LIBRARY_INDEX: Lazy<Schema> = Lazy::new(|| {
    Schema::object(
        ObjectShape::closed()
            .required("version", version())
            .required("titles", Schema::array_of(slug())),
    )
});

static TITLE_INDEX: Lazy<Schema> = Lazy::new(|| {
    Schema::object(
        ObjectShape::closed()
            .required("version", version())
            .optional("pretitle", Schema::string())
            .optional("title", non_empty_string())
            .optional("subtitle", Schema::string())
            .required("volumes", Schema::array_of(slug()))
            .required("status", title_status())
            .optional("synopsis", Schema::string())
            .optional("tags", Schema::array_of(Schema::string()))
            .optional("serialization", Schema::string())
            .optional("credits", Schema::array_of(credit()))
            .optional("links", Schema::array_of(link())),
    )
});

/// Schema of the library root `index.json`.
pub fn library_index() -> &'static Schema {
    &LIBRARY_INDEX
}

/// Schema of a title's `index.json`.
pub fn title_index() -> &'static Schema {
    &TITLE_INDEX
}

fn version() -> Schema {
    Schema::string().one_of(VERSIONS)
}

/// A title or volume identifier.
pub fn slug() -> Schema {
    Schema::string()
        .matching(SLUG_RE.clone())
        .on(ViolationKind::Pattern, slug_message)
}

/// A string holding at least one character. Whitespace counts.
pub fn non_empty_string() -> Schema {
    Schema::string()
        .matching(NON_EMPTY_RE.clone())
        .on(ViolationKind::Pattern, |_| "is an empty string".to_string())
}

/// Publication status of a title.
pub fn title_status() -> Schema {
    Schema::string().one_of(TITLE_STATUSES)
}

/// A person credited on a title and their role.
pub fn credit() -> Schema {
    Schema::object(
        ObjectShape::closed()
            .required("name", Schema::string())
            .required("role", Schema::string()),
    )
}

/// An external link attached to a title.
pub fn link() -> Schema {
    Schema::object(
        ObjectShape::closed()
            .required("title", Schema::string())
            .required("url", Schema::string()),
    )
}

fn slug_message(instance: &Value) -> String {
    format!(
        "'{}' is not a properly formatted slug. Only use words formed of lowercase \
         characters and digits, separated by dashes (i.e: 'this-is-a-slug')",
        instance.as_str().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_title() -> Value {
        json!({
            "version": "2.0",
            "pretitle": "",
            "title": "Vagabond",
            "subtitle": "",
            "volumes": ["vol-01", "vol-02"],
            "status": "ongoing",
            "synopsis": "A wandering swordsman.",
            "tags": ["seinen", "historical"],
            "serialization": "Morning",
            "credits": [{"name": "Takehiko Inoue", "role": "Story & Art"}],
            "links": [{"title": "Publisher", "url": "https://example.com"}]
        })
    }

    #[test]
    fn library_index_accepts_minimal_document() {
        library_index()
            .validate(&json!({"version": "2.0", "titles": []}))
            .unwrap();
        library_index()
            .validate(&json!({"version": "2.0", "titles": ["one-piece", "berserk"]}))
            .unwrap();
    }

    #[test]
    fn library_index_rejects_other_versions() {
        let err = library_index()
            .validate(&json!({"version": "1.0", "titles": []}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::Enum);
        assert_eq!(err.path.segments(), ["version"]);
    }

    #[test]
    fn library_index_is_closed() {
        let err = library_index()
            .validate(&json!({"version": "2.0", "titles": [], "name": "mine"}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::AdditionalProperties);
        assert_eq!(
            err.message,
            "Additional properties are not allowed ('name' was unexpected)"
        );
    }

    #[test]
    fn slug_violation_uses_custom_message() {
        let err = library_index()
            .validate(&json!({"version": "2.0", "titles": ["ok", "Not OK"]}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::Pattern);
        assert_eq!(err.path.segments(), ["titles", "1"]);
        assert!(err.message.starts_with("'Not OK' is not a properly formatted slug."));
        assert!(err.message.contains("'this-is-a-slug'"));
    }

    #[test]
    fn slug_type_violation_keeps_generic_message() {
        let err = library_index()
            .validate(&json!({"version": "2.0", "titles": [7]}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::Type);
        assert_eq!(err.message, "7 is not of type 'string'");
    }

    #[test]
    fn title_index_accepts_full_document() {
        title_index().validate(&valid_title()).unwrap();
    }

    #[test]
    fn title_index_accepts_minimal_document() {
        title_index()
            .validate(&json!({"version": "2.0", "volumes": [], "status": "upcoming"}))
            .unwrap();
    }

    #[test]
    fn title_index_requires_status() {
        let err = title_index()
            .validate(&json!({"version": "2.0", "volumes": []}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::Required);
        assert_eq!(err.message, "'status' is a required property");
        assert!(err.path.is_empty());
    }

    #[test]
    fn title_status_must_be_known() {
        let mut doc = valid_title();
        doc["status"] = json!("archived");
        let err = title_index().validate(&doc).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Enum);
        assert_eq!(err.path.segments(), ["status"]);
        assert_eq!(
            err.message,
            "'archived' is not one of ['upcoming', 'ongoing', 'completed', 'cancelled']"
        );
    }

    #[test]
    fn empty_title_is_an_empty_string() {
        let mut doc = valid_title();
        doc["title"] = json!("");
        let err = title_index().validate(&doc).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Pattern);
        assert_eq!(err.path.segments(), ["title"]);
        assert_eq!(err.message, "is an empty string");
    }

    #[test]
    fn whitespace_only_title_is_not_empty() {
        for blank in [" ", "   ", "\t\n", "\n"] {
            let mut doc = valid_title();
            doc["title"] = json!(blank);
            title_index().validate(&doc).unwrap();
        }
    }

    #[test]
    fn credit_rejects_extra_fields() {
        let mut doc = valid_title();
        doc["credits"] = json!([{"name": "A", "role": "Art", "since": 1999}]);
        let err = title_index().validate(&doc).unwrap_err();
        assert_eq!(err.kind, ViolationKind::AdditionalProperties);
        assert_eq!(err.path.segments(), ["credits", "0"]);
    }

    #[test]
    fn link_requires_url() {
        let mut doc = valid_title();
        doc["links"] = json!([{"title": "Home", "url": "https://a"}, {"title": "Shop"}]);
        let err = title_index().validate(&doc).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Required);
        assert_eq!(err.path.segments(), ["links", "1"]);
        assert_eq!(err.message, "'url' is a required property");
    }

    #[test]
    fn volumes_must_be_slugs() {
        let mut doc = valid_title();
        doc["volumes"] = json!(["vol-01", "vol--02"]);
        let err = title_index().validate(&doc).unwrap_err();
        assert_eq!(err.path.segments(), ["volumes", "1"]);
        assert!(err.message.starts_with("'vol--02' is not a properly formatted slug."));
    }
}
