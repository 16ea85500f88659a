//! Event Sink Implementations
//!
//! Provides concrete implementations of ReconcileEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//! - ConsoleEventSink: Human-readable lines on stderr

mod console;
mod json;

pub use console::{format_event, ConsoleEventSink};
pub use json::JsonEventSink;
