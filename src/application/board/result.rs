//! Board use case result

use crate::domain::entities::{Board, Diagnostic};
use crate::domain::services::{CrossLaneSplit, Zombie};

/// Everything a command needs to render a board or a check report
#[derive(Debug, Clone, PartialEq)]
pub struct BoardResult {
    /// Source description (path or `<stdin>`)
    pub source: String,
    /// Entries read from the source, readable or not
    pub entry_count: usize,
    pub board: Board,
    /// Ingestion diagnostics first, then reconciliation diagnostics
    pub diagnostics: Vec<Diagnostic>,
    pub zombies: Vec<Zombie>,
    pub splits: Vec<CrossLaneSplit>,
    pub iterations: usize,
}

impl BoardResult {
    /// No record was dropped
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// No record was dropped and no parent/child pair straddles lanes
    pub fn is_consistent(&self) -> bool {
        self.is_clean() && self.splits.is_empty()
    }

    /// Node count per lane in board order
    pub fn lane_counts(&self) -> [usize; 3] {
        let lanes = self.board.lanes();
        [
            lanes[0].node_count(),
            lanes[1].node_count(),
            lanes[2].node_count(),
        ]
    }
}
