//! Lenient parsing helpers for persisted and backend JSON.
//!
//! Each extractor degrades a missing or mistyped field to `None` so one bad
//! field never aborts the parsing of its neighbours.

use serde_json::Value;
use thiserror::Error;

use crate::common::{credential::parse_login_id, enums::AccountType};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Parses `data` and requires the top level to be a JSON object.
pub fn parse_json_object(data: &str) -> Result<serde_json::Map<String, Value>, ParseError> {
    match serde_json::from_str(data).map_err(|e| ParseError::InvalidJson(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::NotAnObject(json_kind(&other))),
    }
}

/// Returns a string field if present and non-blank.
pub fn extract_non_blank_string(obj: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Returns a string field if present, blank or not.
pub fn extract_string(obj: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field).and_then(Value::as_str).map(str::to_string)
}

pub fn extract_bool(obj: &serde_json::Map<String, Value>, field: &str) -> Option<bool> {
    obj.get(field).and_then(Value::as_bool)
}

/// Reads a login id stored either as a number or as numeric text.
pub fn extract_login_id(obj: &serde_json::Map<String, Value>, field: &str) -> Option<u64> {
    let raw = match obj.get(field)? {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return None,
    };
    parse_login_id(&raw).ok().flatten()
}

pub fn extract_account_type(obj: &serde_json::Map<String, Value>, field: &str) -> Option<AccountType> {
    obj.get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
