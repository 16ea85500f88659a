//! Per-record diagnostics
//!
//! A diagnostic names the record that was dropped and why. None of them is
//! fatal; the rest of the batch is still reconciled.

use serde::Serialize;

/// A record that could not be placed on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("We did not find a known staging-status attribute on pak '{file_name}'")]
    MissingStatus { file_name: String },

    #[error("We did not find a known staging-status attribute on pak '{file_name}' (found '{status}')")]
    UnknownStatus { file_name: String, status: String },

    #[error("Package entry #{index} could not be read: {message}")]
    MalformedRecord { index: usize, message: String },
}

impl Diagnostic {
    /// Stable identifier for event streams
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::MissingStatus { .. } => "missing_status",
            Diagnostic::UnknownStatus { .. } => "unknown_status",
            Diagnostic::MalformedRecord { .. } => "malformed_record",
        }
    }

    /// Pak the diagnostic refers to, when it has a name
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Diagnostic::MissingStatus { file_name } | Diagnostic::UnknownStatus { file_name, .. } => {
                Some(file_name)
            }
            Diagnostic::MalformedRecord { .. } => None,
        }
    }
}
