//! Package list ingestion
//!
//! Turns the body of a "list package metadata" response into records.
//! Accepted shapes:
//!
//! ```json
//! [ { "FileName": "...", "StagingStatus": "...", ... }, ... ]
//! { "PackageList": [ ... ] }
//! ```

use serde_json::Value;

use crate::domain::entities::{Diagnostic, PackageRecord};
use crate::domain::ports::Ingested;
use crate::error::{PakstageError, PakstageResult};

/// Field wrapping the array in object-shaped responses
pub const PACKAGE_LIST_FIELD: &str = "PackageList";

/// Parse a package listing. Entries that do not deserialize are reported as
/// `MalformedRecord` and skipped; a body of the wrong shape is an error.
pub fn ingest(body: &str, source_name: &str) -> PakstageResult<Ingested> {
    let value: Value = serde_json::from_str(body)?;

    let entries = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(PACKAGE_LIST_FIELD) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(PakstageError::InvalidPackageList {
                    source_name: source_name.to_string(),
                    message: format!("object has no '{}' array", PACKAGE_LIST_FIELD),
                })
            }
        },
        other => {
            return Err(PakstageError::InvalidPackageList {
                source_name: source_name.to_string(),
                message: format!("expected an array of packages, found {}", json_kind(&other)),
            })
        }
    };

    let mut ingested = Ingested::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<PackageRecord>(entry) {
            Ok(record) => ingested.records.push(record),
            Err(e) => ingested.diagnostics.push(Diagnostic::MalformedRecord {
                index,
                message: e.to_string(),
            }),
        }
    }

    Ok(ingested)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
