//! JSON ingestion implementation.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object: `{"a":1}`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Columns follow the key order of the first object; every other object must have exactly the
//! same keys.

use std::fs;
use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::frame::DataFrame;
use crate::types::{Column, Value};

/// Read a JSON file into a [`DataFrame`].
pub fn read_json_from_path(path: impl AsRef<Path>) -> IngestionResult<DataFrame> {
    let text = fs::read_to_string(path)?;
    read_json_from_str(&text)
}

/// Read JSON from an in-memory string into a [`DataFrame`].
pub fn read_json_from_str(input: &str) -> IngestionResult<DataFrame> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => json_objects_to_frame(&items),
            serde_json::Value::Object(_) => json_objects_to_frame(std::slice::from_ref(&v)),
            _ => Err(IngestionError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                IngestionError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        json_objects_to_frame(&values)
    }
}

fn json_objects_to_frame(values: &[serde_json::Value]) -> IngestionResult<DataFrame> {
    let Some(first) = values.first() else {
        return Ok(DataFrame::new());
    };
    let names: Vec<&String> = as_object(first, 1)?.keys().collect();
    let mut columns: Vec<Vec<Value>> = vec![Vec::with_capacity(values.len()); names.len()];

    for (idx0, v) in values.iter().enumerate() {
        let row_num = idx0 + 1;
        let obj = as_object(v, row_num)?;
        if obj.len() != names.len() {
            return Err(IngestionError::SchemaMismatch {
                message: format!(
                    "row {row_num} has {} fields, expected {} ({:?})",
                    obj.len(),
                    names.len(),
                    names
                ),
            });
        }

        for (name, column) in names.iter().zip(columns.iter_mut()) {
            let jv = obj.get(name.as_str()).ok_or_else(|| IngestionError::SchemaMismatch {
                message: format!("row {row_num} missing required field '{name}'"),
            })?;
            column.push(convert_json_value(row_num, name, jv)?);
        }
    }

    let columns = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name.as_str(), values))
        .collect();
    Ok(DataFrame::from_columns(columns)?)
}

fn as_object(v: &serde_json::Value, row_num: usize) -> IngestionResult<&serde_json::Map<String, serde_json::Value>> {
    v.as_object().ok_or_else(|| IngestionError::SchemaMismatch {
        message: format!("row {row_num} is not a json object"),
    })
}

fn convert_json_value(row: usize, column: &str, v: &serde_json::Value) -> IngestionResult<Value> {
    match v {
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).ok_or_else(|| {
            IngestionError::ParseError {
                row,
                column: column.to_string(),
                raw: v.to_string(),
                message: "number is not representable as f64".to_string(),
            }
        }),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Bool(b) => Ok(Value::Text(b.to_string())),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(IngestionError::ParseError {
                row,
                column: column.to_string(),
                raw: v.to_string(),
                message: "expected number, string, or bool".to_string(),
            })
        }
    }
}
