//! Response validator — checks the model's JSON reply against the field
//! dictionary without ever repairing it.
//!
//! Absent and null values always pass: the dictionary declares shapes, not
//! required-ness. A dotted field `parent.child` requires `parent`, when
//! present, to be an object whose `child` entry satisfies the leaf type.
//! Only the first two dot segments take part in that check; anything deeper
//! is ignored.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{FieldType, SchemaDictionary};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("profile is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("field '{field}': expected {expected} to hold nested values")]
    StructuralMismatch {
        field: String,
        expected: &'static str,
    },
}

/// Validates the reply text against the dictionary. Returns on the first
/// violation; the caller decides whether that is fatal.
pub fn validate(json_text: &str, schema: &SchemaDictionary) -> Result<(), ValidationError> {
    let profile: Map<String, Value> = serde_json::from_str(json_text)?;

    for (name, field) in schema {
        if name.contains('.') {
            continue;
        }
        if let Some(value) = profile.get(name) {
            if !value.is_null() {
                check_value(value, field.field_type, name)?;
            }
        }
    }

    for (name, field) in schema {
        let mut segments = name.split('.');
        let (Some(parent), Some(child)) = (segments.next(), segments.next()) else {
            continue;
        };
        if child.is_empty() {
            continue;
        }

        let Some(parent_value) = profile.get(parent) else {
            continue;
        };
        if parent_value.is_null() {
            continue;
        }
        let Some(parent_object) = parent_value.as_object() else {
            return Err(ValidationError::StructuralMismatch {
                field: parent.to_string(),
                expected: "object",
            });
        };

        if let Some(child_value) = parent_object.get(child) {
            if !child_value.is_null() {
                check_value(child_value, field.field_type, name)?;
            }
        }
    }

    Ok(())
}

/// One runtime value against one declared type.
fn check_value(value: &Value, expected: FieldType, field: &str) -> Result<(), ValidationError> {
    let matches = match expected {
        FieldType::String => value.is_string(),
        FieldType::Int => match value {
            Value::Number(n) => {
                if is_integral(n) {
                    true
                } else {
                    return Err(ValidationError::TypeMismatch {
                        field: field.to_string(),
                        expected: expected.label(),
                        actual: "float",
                    });
                }
            }
            _ => false,
        },
        FieldType::Float => value.is_number(),
        FieldType::Bool => value.is_boolean(),
        FieldType::Array => value.is_array(),
        FieldType::Object => value.is_object(),
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::TypeMismatch {
            field: field.to_string(),
            expected: expected.label(),
            actual: runtime_type_name(value),
        })
    }
}

/// A number counts as an int when it carries no fractional part, so `25.0`
/// from a JSON reply still satisfies an `int` field.
fn is_integral(n: &serde_json::Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0)
}

fn runtime_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
