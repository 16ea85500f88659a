//! RecordSource port - where package records come from
//!
//! The reconciler never fetches anything itself. A source hands over the
//! records it could read plus diagnostics for the entries it could not.

use crate::domain::entities::{Diagnostic, PackageRecord};
use crate::error::PakstageResult;

/// Records read from a source, with per-entry problems
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingested {
    pub records: Vec<PackageRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Abstract supplier of the package listing
pub trait RecordSource {
    /// Human-readable name for logs and errors
    fn describe(&self) -> String;

    /// Read the full listing
    fn load(&self) -> PakstageResult<Ingested>;
}

/// In-memory source, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    records: Vec<PackageRecord>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticRecordSource {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> PakstageResult<Ingested> {
        Ok(Ingested {
            records: self.records.clone(),
            diagnostics: Vec::new(),
        })
    }
}
