//! Payload field extraction helpers

use crate::handler::result::Payload;
use serde_json::Value;

/// Render a scalar JSON value as display text.
///
/// Strings are rendered without quotes; numbers use their JSON form, so
/// `5000.0` stays `5000.0` and `1000` stays `1000`. Null, arrays and
/// objects are not scalars.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Look up a scalar field by key
pub fn field(payload: &Payload, key: &str) -> Option<String> {
    payload.get(key).and_then(scalar_text)
}

/// Render any JSON value compactly; scalars use [`scalar_text`]
pub fn any_text(value: &Value) -> String {
    scalar_text(value).unwrap_or_else(|| value.to_string())
}

/// Collect a string array field, skipping non-scalar entries
pub fn text_list(payload: &Payload, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}
