//! Error types for pakstage
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Per-record problems are not errors: they are reported as
//! [`Diagnostic`](crate::domain::entities::Diagnostic)s and never abort a batch.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pakstage operations
pub type PakstageResult<T> = Result<T, PakstageError>;

/// Main error type for pakstage operations
#[derive(Error, Debug)]
pub enum PakstageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Body is not JSON at all
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Body is JSON but not a package list
    #[error("invalid package list from {source_name}: {message}")]
    InvalidPackageList {
        source_name: String,
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_package_list() {
        let err = PakstageError::InvalidPackageList {
            source_name: "paks.json".to_string(),
            message: "expected an array of packages".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid package list from paks.json: expected an array of packages"
        );
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = PakstageError::InvalidConfig {
            file: PathBuf::from("pakstage.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config in pakstage.toml: expected a table"
        );
    }
}
