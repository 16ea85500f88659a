//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod reconcile_events;
pub mod record_source;

pub use reconcile_events::{NoopEventSink, ReconcileEvent, ReconcileEventSink};
pub use record_source::{Ingested, RecordSource, StaticRecordSource};
