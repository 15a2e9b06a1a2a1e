use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{operation}: expected a string but received {received}")]
    InvalidInputType {
        operation: &'static str,
        received: ValueKind,
    },

    #[error("unknown case: {0} (expected kebab, camel or dot)")]
    UnknownCase(String),
}

/// The kind of a dynamically typed value, as reported in type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Accept `value` only if it is a JSON string.
pub fn text_input<'a>(operation: &'static str, value: &'a Value) -> Result<&'a str, ConversionError> {
    value
        .as_str()
        .ok_or_else(|| ConversionError::InvalidInputType {
            operation,
            received: ValueKind::of(value),
        })
}
