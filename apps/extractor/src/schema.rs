//! Field dictionary — the declared contract for one extraction run.
//!
//! The dictionary is loaded once from a declarative YAML document and is
//! immutable afterwards. A dotted key such as `location.city` stays a single
//! flat field here; its nesting semantics are realized only by the prompt
//! templates and the response validator.

use std::collections::BTreeMap;

use crate::errors::AppError;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Object,
}

impl FieldType {
    /// The type name as it appears in schema documents, prompt lines, and
    /// validator diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Bool => "bool",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(FieldType::String),
            "int" => Some(FieldType::Int),
            "float" => Some(FieldType::Float),
            "bool" => Some(FieldType::Bool),
            "array" => Some(FieldType::Array),
            "object" => Some(FieldType::Object),
            _ => None,
        }
    }
}

/// One declared field. `name` is the key exactly as written in the
/// dictionary, dotted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub field_type: FieldType,
}

impl SchemaField {
    pub fn is_array(&self) -> bool {
        self.field_type == FieldType::Array
    }

    pub fn is_object(&self) -> bool {
        self.field_type == FieldType::Object
    }
}

/// Field name → field. A `BTreeMap` so iteration is lexicographic: repeated
/// runs over the same dictionary render byte-identical prompt text.
pub type SchemaDictionary = BTreeMap<String, SchemaField>;

/// Parses a declarative YAML key→value document into a dictionary.
///
/// Fails only when the document cannot be decoded into a string-keyed
/// mapping at all. Per-key type ambiguity never fails — the value's shape
/// decides, and anything unrecognized falls back to `string`.
pub fn parse_schema(raw: &str, source_name: &str) -> Result<SchemaDictionary, AppError> {
    let document: BTreeMap<String, serde_yaml::Value> =
        serde_yaml::from_str(raw).map_err(|e| AppError::SchemaParse {
            source_name: source_name.to_string(),
            source: e,
        })?;

    Ok(document
        .into_iter()
        .map(|(name, value)| {
            let field = SchemaField {
                field_type: resolve_type(&value),
                name: name.clone(),
            };
            (name, field)
        })
        .collect())
}

/// Type resolution policy, in priority order: an explicit string literal
/// naming a known type wins; otherwise the value's shape implies the type;
/// otherwise `string`.
fn resolve_type(value: &serde_yaml::Value) -> FieldType {
    match value {
        serde_yaml::Value::String(name) => {
            FieldType::from_name(name).unwrap_or(FieldType::String)
        }
        serde_yaml::Value::Sequence(_) => FieldType::Array,
        serde_yaml::Value::Mapping(_) => FieldType::Object,
        serde_yaml::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                FieldType::Int
            } else {
                FieldType::Float
            }
        }
        serde_yaml::Value::Bool(_) => FieldType::Bool,
        _ => FieldType::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_type_names() {
        let yaml = "name: string\nage: int\nheight: float\nmarried: bool\nskills: array\ntags: object\n";
        let schema = parse_schema(yaml, "dictionary.yaml").unwrap();
        assert_eq!(schema["name"].field_type, FieldType::String);
        assert_eq!(schema["age"].field_type, FieldType::Int);
        assert_eq!(schema["height"].field_type, FieldType::Float);
        assert_eq!(schema["married"].field_type, FieldType::Bool);
        assert_eq!(schema["skills"].field_type, FieldType::Array);
        assert_eq!(schema["tags"].field_type, FieldType::Object);
    }

    #[test]
    fn test_unknown_type_name_falls_back_to_string() {
        let schema = parse_schema("bio: text\n", "dictionary.yaml").unwrap();
        assert_eq!(schema["bio"].field_type, FieldType::String);
    }

    #[test]
    fn test_list_literal_implies_array() {
        let schema = parse_schema("education:\n  - university\n  - year\n", "d.yaml").unwrap();
        assert!(schema["education"].is_array());
    }

    #[test]
    fn test_mapping_literal_implies_object() {
        let schema = parse_schema("social:\n  telegram: string\n", "d.yaml").unwrap();
        assert!(schema["social"].is_object());
    }

    #[test]
    fn test_bare_literals_take_natural_types() {
        let schema = parse_schema("age: 25\nheight: 1.82\nmarried: true\n", "d.yaml").unwrap();
        assert_eq!(schema["age"].field_type, FieldType::Int);
        assert_eq!(schema["height"].field_type, FieldType::Float);
        assert_eq!(schema["married"].field_type, FieldType::Bool);
    }

    #[test]
    fn test_null_value_falls_back_to_string() {
        let schema = parse_schema("note: null\n", "d.yaml").unwrap();
        assert_eq!(schema["note"].field_type, FieldType::String);
    }

    #[test]
    fn test_dotted_key_stays_one_flat_field() {
        let schema = parse_schema("location.city: string\n", "d.yaml").unwrap();
        assert_eq!(schema.len(), 1);
        let field = &schema["location.city"];
        assert_eq!(field.name, "location.city");
        assert_eq!(field.field_type, FieldType::String);
        assert!(!field.is_object());
    }

    #[test]
    fn test_malformed_document_fails() {
        let err = parse_schema("name: [unclosed\n", "broken.yaml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken.yaml"), "got: {message}");
    }

    #[test]
    fn test_non_mapping_document_fails() {
        assert!(parse_schema("- just\n- a\n- list\n", "list.yaml").is_err());
    }

    #[test]
    fn test_loading_is_idempotent() {
        let yaml = "name: string\nage: int\nlocation.city: string\nskills: array\n";
        let first = parse_schema(yaml, "d.yaml").unwrap();
        let second = parse_schema(yaml, "d.yaml").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_order_is_lexicographic() {
        let yaml = "zeta: string\nalpha: int\nmiddle: bool\n";
        let schema = parse_schema(yaml, "d.yaml").unwrap();
        let names: Vec<&str> = schema.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "middle", "zeta"]);
    }
}
