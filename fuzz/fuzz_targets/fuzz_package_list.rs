#![no_main]

use libfuzzer_sys::fuzz_target;
use pakstage::infrastructure::ingest;
use pakstage::Reconciler;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        // Ingestion and reconciliation must never panic, and every
        // classified record must land on the board exactly once.
        if let Ok(ingested) = ingest(body, "fuzz") {
            let result = Reconciler::new().reconcile(&ingested.records);
            let classified = ingested.records.iter().filter(|r| r.lane().is_some()).count();
            assert_eq!(result.board.real_node_count(), classified);
            assert!(result.iterations <= Reconciler::iteration_cap(ingested.records.len()));
        }
    }
});
