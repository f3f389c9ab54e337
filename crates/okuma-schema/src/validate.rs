//! # Schema Validation
//!
//! Structural validation of parsed JSON documents against schemas built
//! from a handful of composable rules:
//!
//! - type check ([`Schema::string`], [`Schema::array_of`], [`Schema::object`])
//! - enum check ([`Schema::one_of`])
//! - pattern check ([`Schema::matching`])
//! - object shape check ([`ObjectShape`])
//! - array-of check (the item schema of [`Schema::array_of`])
//!
//! ## First Violation Wins
//!
//! Validation stops at the first violated rule and reports it with the
//! instance path that led to it. Rules of a schema run in the order they
//! were added. An object shape reports missing required fields, then
//! undeclared fields, then descends into declared fields in declaration
//! order. Arrays are checked element by element.
//!
//! ## Messages
//!
//! A schema may attach a custom message to a [`ViolationKind`] with
//! [`Schema::on`]. When one of its own rules fails with that kind, the
//! custom message is built from the failing instance; otherwise a generic
//! message naming the expected constraint is used. Custom messages never
//! leak into nested schemas.

use std::fmt;

use okuma_core::ErrorPath;
use regex::Regex;
use serde_json::{Map, Value};

/// Category of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The instance has the wrong JSON type.
    Type,
    /// The instance is not one of the allowed values.
    Enum,
    /// The string instance does not match the required pattern.
    Pattern,
    /// A required object field is absent.
    Required,
    /// A closed object carries an undeclared field.
    AdditionalProperties,
}

impl ViolationKind {
    /// The JSON Schema keyword corresponding to this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Enum => "enum",
            Self::Pattern => "pattern",
            Self::Required => "required",
            Self::AdditionalProperties => "additionalProperties",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Object keys and array indices leading to the failing instance.
    pub path: ErrorPath,
    /// Which rule failed.
    pub kind: ViolationKind,
    /// Custom message if the failing schema declares one, generic otherwise.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Builds a custom message from the failing instance.
pub type MessageFn = fn(&Value) -> String;

/// JSON types a schema can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    String,
    Array,
    Object,
}

impl JsonType {
    fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    fn accepts(&self, instance: &Value) -> bool {
        match self {
            Self::String => instance.is_string(),
            Self::Array => instance.is_array(),
            Self::Object => instance.is_object(),
        }
    }
}

#[derive(Debug)]
enum Rule {
    Type(JsonType),
    Enum(&'static [&'static str]),
    Pattern(Regex),
    Items(Box<Schema>),
    Shape(ObjectShape),
}

/// Outcome of a single failed rule: either raised by the rule itself, or a
/// violation already located and worded by a nested schema.
enum Fault {
    Local(ViolationKind, String),
    Nested(Violation),
}

impl Rule {
    fn check(&self, instance: &Value, at: &ErrorPath) -> Result<(), Fault> {
        match self {
            Self::Type(ty) => {
                if ty.accepts(instance) {
                    Ok(())
                } else {
                    Err(Fault::Local(
                        ViolationKind::Type,
                        format!("{} is not of type '{}'", quote(instance), ty.name()),
                    ))
                }
            }
            Self::Enum(allowed) => {
                if allowed.iter().any(|v| instance.as_str() == Some(*v)) {
                    Ok(())
                } else {
                    let listed: Vec<String> = allowed.iter().map(|v| format!("'{v}'")).collect();
                    Err(Fault::Local(
                        ViolationKind::Enum,
                        format!("{} is not one of [{}]", quote(instance), listed.join(", ")),
                    ))
                }
            }
            Self::Pattern(regex) => match instance.as_str() {
                Some(s) if !regex.is_match(s) => Err(Fault::Local(
                    ViolationKind::Pattern,
                    format!("{} does not match '{}'", quote(instance), regex.as_str()),
                )),
                _ => Ok(()),
            },
            Self::Items(item) => match instance.as_array() {
                Some(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        item.validate_at(element, &at.child(index.to_string()))
                            .map_err(Fault::Nested)?;
                    }
                    Ok(())
                }
                None => Ok(()),
            },
            Self::Shape(shape) => match instance.as_object() {
                Some(object) => shape.check(object, at),
                None => Ok(()),
            },
        }
    }
}

/// Strings in single quotes, any other value as compact JSON.
fn quote(instance: &Value) -> String {
    match instance {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

/// A declarative document schema.
///
/// Schemas are immutable once built and hold no interior state, so a single
/// instance can be shared by every validation call in the process.
pub struct Schema {
    rules: Vec<Rule>,
    messages: Vec<(ViolationKind, MessageFn)>,
}

impl Schema {
    fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            messages: Vec::new(),
        }
    }

    /// A schema accepting any string.
    pub fn string() -> Self {
        Self::with_rules(vec![Rule::Type(JsonType::String)])
    }

    /// A schema accepting arrays whose every element satisfies `item`.
    pub fn array_of(item: Schema) -> Self {
        Self::with_rules(vec![
            Rule::Type(JsonType::Array),
            Rule::Items(Box::new(item)),
        ])
    }

    /// A schema accepting objects of the given shape.
    pub fn object(shape: ObjectShape) -> Self {
        Self::with_rules(vec![Rule::Type(JsonType::Object), Rule::Shape(shape)])
    }

    /// Restrict the instance to one of `allowed`.
    #[must_use]
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.rules.push(Rule::Enum(allowed));
        self
    }

    /// Require string instances to contain a match of `pattern`.
    ///
    /// Like JSON Schema, the pattern is searched for, not implicitly
    /// anchored: anchor it with `^...$` to constrain the whole string.
    #[must_use]
    pub fn matching(mut self, pattern: Regex) -> Self {
        self.rules.push(Rule::Pattern(pattern));
        self
    }

    /// Word violations of `kind` raised by this schema with `message`.
    #[must_use]
    pub fn on(mut self, kind: ViolationKind, message: MessageFn) -> Self {
        self.messages.push((kind, message));
        self
    }

    /// Validate `instance` against this schema.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found, located relative to
    /// `instance`.
    pub fn validate(&self, instance: &Value) -> Result<(), Violation> {
        self.validate_at(instance, &ErrorPath::new())
    }

    fn validate_at(&self, instance: &Value, at: &ErrorPath) -> Result<(), Violation> {
        for rule in &self.rules {
            match rule.check(instance, at) {
                Ok(()) => {}
                Err(Fault::Nested(violation)) => return Err(violation),
                Err(Fault::Local(kind, generic)) => {
                    let message = match self.custom_message(kind) {
                        Some(build) => build(instance),
                        None => generic,
                    };
                    return Err(Violation {
                        path: at.clone(),
                        kind,
                        message,
                    });
                }
            }
        }
        Ok(())
    }

    fn custom_message(&self, kind: ViolationKind) -> Option<MessageFn> {
        self.messages
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, build)| *build)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom: Vec<ViolationKind> = self.messages.iter().map(|(kind, _)| *kind).collect();
        f.debug_struct("Schema")
            .field("rules", &self.rules)
            .field("custom_messages", &custom)
            .finish()
    }
}

#[derive(Debug)]
struct Field {
    name: &'static str,
    schema: Schema,
    required: bool,
}

/// Declared fields of an object. Undeclared fields are rejected.
#[derive(Debug)]
pub struct ObjectShape {
    fields: Vec<Field>,
}

impl ObjectShape {
    /// A shape with no declared fields yet.
    pub fn closed() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a field that must be present.
    #[must_use]
    pub fn required(mut self, name: &'static str, schema: Schema) -> Self {
        self.fields.push(Field {
            name,
            schema,
            required: true,
        });
        self
    }

    /// Declare a field that may be absent.
    #[must_use]
    pub fn optional(mut self, name: &'static str, schema: Schema) -> Self {
        self.fields.push(Field {
            name,
            schema,
            required: false,
        });
        self
    }

    fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    fn check(&self, object: &Map<String, Value>, at: &ErrorPath) -> Result<(), Fault> {
        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| f.required && !object.contains_key(f.name))
        {
            return Err(Fault::Local(
                ViolationKind::Required,
                format!("'{}' is a required property", missing.name),
            ));
        }

        let extras: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| !self.declares(key))
            .collect();
        if !extras.is_empty() {
            let quoted: Vec<String> = extras.iter().map(|e| format!("'{e}'")).collect();
            let verb = if extras.len() == 1 { "was" } else { "were" };
            return Err(Fault::Local(
                ViolationKind::AdditionalProperties,
                format!(
                    "Additional properties are not allowed ({} {verb} unexpected)",
                    quoted.join(", ")
                ),
            ));
        }

        for field in &self.fields {
            if let Some(value) = object.get(field.name) {
                field
                    .schema
                    .validate_at(value, &at.child(field.name))
                    .map_err(Fault::Nested)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair() -> Schema {
        Schema::object(
            ObjectShape::closed()
                .required("name", Schema::string())
                .optional("tags", Schema::array_of(Schema::string())),
        )
    }

    #[test]
    fn accepts_conforming_object() {
        pair().validate(&json!({"name": "x", "tags": ["a", "b"]})).unwrap();
        pair().validate(&json!({"name": "x"})).unwrap();
    }

    #[test]
    fn reports_type_mismatch_at_root() {
        let err = pair().validate(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Type);
        assert!(err.path.is_empty());
        assert_eq!(err.message, r#"["not","an","object"] is not of type 'object'"#);
    }

    #[test]
    fn reports_missing_required_field() {
        let err = pair().validate(&json!({"tags": []})).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Required);
        assert_eq!(err.message, "'name' is a required property");
    }

    #[test]
    fn required_is_reported_before_additional_properties() {
        let err = pair().validate(&json!({"extra": 1})).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Required);
    }

    #[test]
    fn reports_undeclared_fields_in_document_order() {
        let err = pair()
            .validate(&json!({"name": "x", "zeta": 1, "alpha": 2}))
            .unwrap_err();
        assert_eq!(err.kind, ViolationKind::AdditionalProperties);
        assert_eq!(
            err.message,
            "Additional properties are not allowed ('zeta', 'alpha' were unexpected)"
        );

        let err = pair().validate(&json!({"name": "x", "zeta": 1})).unwrap_err();
        assert_eq!(
            err.message,
            "Additional properties are not allowed ('zeta' was unexpected)"
        );
    }

    #[test]
    fn locates_nested_array_element() {
        let err = pair()
            .validate(&json!({"name": "x", "tags": ["a", 3]}))
            .unwrap_err();
        assert_eq!(err.path.segments(), ["tags", "1"]);
        assert_eq!(err.kind, ViolationKind::Type);
        assert_eq!(err.message, "3 is not of type 'string'");
    }

    #[test]
    fn enum_generic_message_lists_allowed_values() {
        let schema = Schema::string().one_of(&["2.0"]);
        let err = schema.validate(&json!("1.0")).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Enum);
        assert_eq!(err.message, "'1.0' is not one of ['2.0']");
    }

    #[test]
    fn pattern_is_searched_not_anchored() {
        let schema = Schema::string().matching(Regex::new(r"\d").unwrap());
        schema.validate(&json!("abc1def")).unwrap();
        let err = schema.validate(&json!("abc")).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Pattern);
        assert_eq!(err.message, r"'abc' does not match '\d'");
    }

    #[test]
    fn custom_message_overrides_generic_for_its_kind_only() {
        let schema = Schema::string()
            .matching(Regex::new("^x$").unwrap())
            .on(ViolationKind::Pattern, |v| {
                format!("custom: {}", v.as_str().unwrap_or_default())
            });

        let err = schema.validate(&json!("y")).unwrap_err();
        assert_eq!(err.message, "custom: y");

        let err = schema.validate(&json!(1)).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Type);
        assert_eq!(err.message, "1 is not of type 'string'");
    }

    #[test]
    fn custom_message_does_not_leak_into_children() {
        let schema = Schema::array_of(Schema::string())
            .on(ViolationKind::Type, |_| "parent message".to_string());
        let err = schema.validate(&json!([1])).unwrap_err();
        assert_eq!(err.message, "1 is not of type 'string'");
        let err = schema.validate(&json!({})).unwrap_err();
        assert_eq!(err.message, "parent message");
    }

    #[test]
    fn generic_messages_quote_strings_like_property_names() {
        let err = Schema::object(ObjectShape::closed())
            .validate(&json!("text"))
            .unwrap_err();
        assert_eq!(err.message, "'text' is not of type 'object'");

        let err = Schema::string()
            .one_of(&["upcoming", "ongoing"])
            .validate(&json!("paused"))
            .unwrap_err();
        assert_eq!(err.message, "'paused' is not one of ['upcoming', 'ongoing']");

        let err = Schema::string().one_of(&["2.0"]).validate(&json!(2)).unwrap_err();
        assert_eq!(err.kind, ViolationKind::Type);
        assert_eq!(err.message, "2 is not of type 'string'");
    }

    #[test]
    fn violation_display() {
        let err = pair().validate(&json!({"name": 1})).unwrap_err();
        assert_eq!(err.to_string(), "name: 1 is not of type 'string'");
        let err = pair().validate(&json!(null)).unwrap_err();
        assert_eq!(err.to_string(), "(root): null is not of type 'object'");
    }
}
