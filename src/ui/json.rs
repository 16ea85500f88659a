//! NDJSON output helpers for CLI commands.
//!
//! Reconcile progress is streamed by `JsonEventSink`; this module writes the
//! closing `data` and `error` events.

use std::io::{self, Write};

use serde::Serialize;

use pakstage::domain::entities::{Board, Diagnostic};
use pakstage::domain::services::CrossLaneSplit;

/// Board payload of `pakstage --json board`
#[derive(Debug, Serialize)]
pub struct BoardDataEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub source: &'a str,
    pub board: &'a Board,
}

impl<'a> BoardDataEvent<'a> {
    pub fn new(source: &'a str, board: &'a Board) -> Self {
        Self {
            event: "data",
            command: "board",
            source,
            board,
        }
    }
}

/// Report payload of `pakstage --json check`
#[derive(Debug, Serialize)]
pub struct CheckDataEvent<'a> {
    pub event: &'static str,
    pub command: &'static str,
    pub source: &'a str,
    pub success: bool,
    pub diagnostics: &'a [Diagnostic],
    pub splits: &'a [CrossLaneSplit],
}

impl<'a> CheckDataEvent<'a> {
    pub fn new(
        source: &'a str,
        success: bool,
        diagnostics: &'a [Diagnostic],
        splits: &'a [CrossLaneSplit],
    ) -> Self {
        Self {
            event: "data",
            command: "check",
            source,
            success,
            diagnostics,
            splits,
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    write_typed_event(out, event)
}

/// Write raw JSON to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize + ?Sized, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
