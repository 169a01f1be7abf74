//! Presence checks on request bodies.
//!
//! Bodies are decoded to a plain `Value` and never matched against a schema;
//! the only rejections are "nothing was sent" and "what was sent is not JSON".

use serde_json::Value;

use crate::errors::ServiceError;

/// Decode a request body. An empty or all-whitespace body reads as `null`.
pub fn read_json(bytes: &[u8]) -> Result<Value, ServiceError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ServiceError::InvalidJson(e.to_string()))
}

/// Reject only an absent body; every other JSON value passes through.
pub fn require_present(value: Value) -> Result<Value, ServiceError> {
    if value.is_null() {
        return Err(ServiceError::MissingBody);
    }
    Ok(value)
}

/// Reject absent and empty bodies: `null`, `{}`, `[]`, `""`, `false` and `0`.
pub fn require_non_empty(value: Value) -> Result<Value, ServiceError> {
    let empty = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    };
    if empty {
        return Err(ServiceError::MissingBody);
    }
    Ok(value)
}
