use std::fs;
use std::path::Path;

use cogito_types::{Error, Result, Thought};
use serde_json::Value;

/// Read and shape-check one collection document.
///
/// Exactly one read per session; retries are full session reloads driven
/// by the caller. A missing or unreadable file and a JSON parse failure
/// are load errors; a payload that parses but is not an array is a shape
/// error.
pub fn load_collection(path: &Path) -> Result<Vec<Thought>> {
    let raw = fs::read_to_string(path)
        .map_err(|err| Error::Load(format!("failed to read {}: {}", path.display(), err)))?;
    parse_collection(&raw)
}

/// Parse a collection payload that has already been read.
pub fn parse_collection(raw: &str) -> Result<Vec<Thought>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| Error::Load(format!("invalid JSON: {}", err)))?;

    let Value::Array(entries) = value else {
        return Err(Error::Shape(format!(
            "expected an array of thoughts, got {}",
            json_type_name(&value)
        )));
    };

    // Entries are never validated individually: anything that is not a
    // thought-shaped object passes through as an empty record.
    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
