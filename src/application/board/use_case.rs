//! Board Use Case
//!
//! Orchestrates the board flow:
//! 1. Load records from a source
//! 2. Reconcile them into lane forests
//! 3. Derive cross-lane splits
//! 4. Emit events for every dropped record and resolved zombie

use std::sync::Arc;

use crate::domain::ports::{NoopEventSink, ReconcileEvent, ReconcileEventSink, RecordSource};
use crate::domain::services::{cross_lane_splits, Reconciler};
use crate::error::PakstageResult;

use super::result::BoardResult;

/// Board use case, parameterized by its record source
pub struct BoardUseCase<RS>
where
    RS: RecordSource,
{
    source: RS,
    reconciler: Reconciler,
}

impl<RS> BoardUseCase<RS>
where
    RS: RecordSource,
{
    pub fn new(source: RS) -> Self {
        Self {
            source,
            reconciler: Reconciler::new(),
        }
    }

    pub fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    /// Run silently
    pub fn execute(&self) -> PakstageResult<BoardResult> {
        self.execute_with_events(Arc::new(NoopEventSink))
    }

    /// Run, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        event_sink: Arc<dyn ReconcileEventSink>,
    ) -> PakstageResult<BoardResult> {
        let source = self.source.describe();
        let ingested = self.source.load()?;
        let entry_count = ingested.records.len() + ingested.diagnostics.len();

        event_sink.on_event(ReconcileEvent::Started {
            source: source.clone(),
            record_count: entry_count,
        });

        let reconciliation = self.reconciler.reconcile(&ingested.records);

        let mut diagnostics = ingested.diagnostics;
        diagnostics.extend(reconciliation.diagnostics);

        for diagnostic in &diagnostics {
            event_sink.on_event(ReconcileEvent::RecordRejected {
                diagnostic: diagnostic.clone(),
            });
        }

        if event_sink.wants_detailed_events() {
            for zombie in &reconciliation.zombies {
                event_sink.on_event(ReconcileEvent::ZombieResolved {
                    zombie: zombie.clone(),
                });
            }
        }

        let splits = cross_lane_splits(&reconciliation.board);

        let result = BoardResult {
            source,
            entry_count,
            board: reconciliation.board,
            diagnostics,
            zombies: reconciliation.zombies,
            splits,
            iterations: reconciliation.iterations,
        };

        event_sink.on_event(ReconcileEvent::Completed {
            lane_counts: result.lane_counts(),
            placeholder_count: result.board.placeholders().len(),
            rejected_count: result.diagnostics.len(),
            iterations: result.iterations,
        });

        Ok(result)
    }
}
