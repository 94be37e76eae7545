//! # Loading
//!
//! Deserializes schema nodes and JSON instances from text or files.
//!
//! Schema files may be YAML or JSON; the file extension decides the parser
//! (`.yaml`/`.yml` → YAML, anything else → JSON). Instances are always
//! JSON. Parse failures are faults (`AppError`), never validation findings.

use crate::error::{AppError, AppResult};
use crate::schema::SchemaNode;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parses a schema node from YAML text.
pub fn parse_schema_yaml(text: &str) -> AppResult<SchemaNode> {
    serde_yaml::from_str(text)
        .map_err(|e| AppError::Parse(format!("Failed to parse schema YAML: {}", e)))
}

/// Parses a schema node from JSON text.
pub fn parse_schema_json(text: &str) -> AppResult<SchemaNode> {
    serde_json::from_str(text)
        .map_err(|e| AppError::Parse(format!("Failed to parse schema JSON: {}", e)))
}

/// Loads a schema node from a file, dispatching on the extension.
pub fn load_schema_file(path: &Path) -> AppResult<SchemaNode> {
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => parse_schema_yaml(&text),
        _ => parse_schema_json(&text),
    }
}

/// Loads a JSON instance from a file, preserving object key order.
pub fn load_instance_file(path: &Path) -> AppResult<Value> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| AppError::Parse(format!("Failed to parse instance JSON: {}", e)))
}
