//! Identity extraction from provider userinfo payloads.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProviderError, Result};

/// An identity value as providers send it: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdentityValue {
    Text(String),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
}

impl IdentityValue {
    /// Normalize to the string stored in the session.
    pub fn normalize(self) -> String {
        match self {
            IdentityValue::Text(s) => s,
            IdentityValue::Integer(n) => n.to_string(),
            IdentityValue::Unsigned(n) => n.to_string(),
        }
    }
}

/// Walk `path` through nested JSON objects.
pub fn get_path<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(payload, |value, key| value.get(key))
}

/// Extract the identity at `path` and normalize it to a string.
///
/// # Errors
///
/// [`ProviderError::MissingField`] if the path is absent or the value is
/// neither a string nor an integer.
pub fn extract_identity(payload: &Value, path: &[&str]) -> Result<String> {
    let field = path.join(".");
    let value = get_path(payload, path).ok_or_else(|| ProviderError::MissingField {
        field: field.clone(),
        message: "field not found".into(),
    })?;

    IdentityValue::deserialize(value)
        .map(IdentityValue::normalize)
        .map_err(|_| ProviderError::MissingField {
            field,
            message: format!("expected string or integer, got {}", json_type(value)),
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
