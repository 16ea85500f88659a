//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sources/` - Record sources (JSON file, stdin)
//! - `events/` - Event sinks (NDJSON, console)

pub mod events;
pub mod sources;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use sources::{ingest, JsonRecordSource};
