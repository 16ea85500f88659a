//! Reconcile Event Port
//!
//! Observable interface for board reconciliation.
//! Enables NDJSON event streams, verbose console logs, and silent runs.

use crate::domain::entities::Diagnostic;
use crate::domain::services::Zombie;

/// Event emitted while building a board
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileEvent {
    /// Records were loaded from a source
    Started { source: String, record_count: usize },

    /// A record could not be placed on the board
    RecordRejected { diagnostic: Diagnostic },

    /// A child that branching could not place has been resolved
    ZombieResolved { zombie: Zombie },

    /// Reconciliation finished
    Completed {
        lane_counts: [usize; 3],
        placeholder_count: usize,
        rejected_count: usize,
        iterations: usize,
    },
}

/// Trait for receiving reconcile events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait ReconcileEventSink: Send + Sync {
    /// Handle a reconcile event
    fn on_event(&self, event: ReconcileEvent);

    /// Check if this sink wants per-zombie events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ReconcileEventSink for NoopEventSink {
    fn on_event(&self, _event: ReconcileEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
