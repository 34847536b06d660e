//! JSON loading.
//!
//! Supported inputs:
//! - A JSON array of listing objects (the output of the CSV conversion step)
//! - Newline-delimited JSON (NDJSON), one listing object per line

use std::fs;
use std::path::Path;

use crate::error::{ListingError, ListingResult};
use crate::types::ListingRecord;

use super::validate_records;

/// Load listings from a JSON file.
pub fn load_json_from_path(path: impl AsRef<Path>) -> ListingResult<Vec<ListingRecord>> {
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load listings from an in-memory JSON string.
pub fn load_json_from_str(input: &str) -> ListingResult<Vec<ListingRecord>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ListingError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    let values = if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => items,
            serde_json::Value::Object(_) => vec![v],
            _ => {
                return Err(ListingError::SchemaMismatch {
                    message: "json must be an object, an array of objects, or NDJSON".to_string(),
                });
            }
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
                ListingError::SchemaMismatch {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        values
    };

    let records = records_from_values(values)?;
    validate_records(&records)?;
    Ok(records)
}

fn records_from_values(values: Vec<serde_json::Value>) -> ListingResult<Vec<ListingRecord>> {
    let mut records = Vec::with_capacity(values.len());
    for (idx0, v) in values.into_iter().enumerate() {
        let row_num = idx0 + 1;
        if !v.is_object() {
            return Err(ListingError::SchemaMismatch {
                message: format!("row {row_num} is not a json object"),
            });
        }
        let record = serde_json::from_value::<ListingRecord>(v).map_err(|e| {
            ListingError::SchemaMismatch {
                message: format!("row {row_num}: {e}"),
            }
        })?;
        records.push(record);
    }
    Ok(records)
}
