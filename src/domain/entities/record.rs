//! PackageRecord entity - one row of the package metadata listing
//!
//! Field names are PascalCase on the wire (`FileName`, `StagingStatus`,
//! `Parent`, `StagingStart`, `StagingEnd`). Unknown wire fields are ignored.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::value_objects::{Lane, Timestamp};

/// A flat content-package entry as delivered by the record source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageRecord {
    /// Pak file name, used as the key
    pub file_name: String,

    /// Raw staging status (`PRIVATE`, `WINDOW`, `PUBLIC`, any case)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_status: Option<String>,

    /// File name of the parent pak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub staging_start: Option<Timestamp>,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub staging_end: Option<Timestamp>,
}

impl PackageRecord {
    /// Create a root record with the given staging status
    pub fn new(file_name: impl Into<String>, staging_status: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            staging_status: Some(staging_status.into()),
            parent: None,
            staging_start: None,
            staging_end: None,
        }
    }

    /// Create a record without any staging status
    pub fn without_status(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            staging_status: None,
            parent: None,
            staging_start: None,
            staging_end: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_window(mut self, start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        self.staging_start = start;
        self.staging_end = end;
        self
    }

    /// Parent reference, treating an empty string as no parent
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }

    /// Staging status, treating an empty string as absent
    pub fn status(&self) -> Option<&str> {
        self.staging_status.as_deref().filter(|s| !s.is_empty())
    }

    /// Lane this record belongs to, if its status is known
    pub fn lane(&self) -> Option<Lane> {
        self.status().and_then(Lane::from_status)
    }
}

/// Timestamps are display-only: a value of the wrong JSON type is dropped
/// instead of failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().map(Timestamp::Epoch),
        Some(serde_json::Value::String(s)) => Some(Timestamp::Text(s)),
        _ => None,
    })
}
