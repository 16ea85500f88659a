//! Console Event Sink
//!
//! Human-readable event lines on stderr, used with `-v`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};
use crate::domain::services::ZombieResolution;

/// Writes one line per event
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    detailed: bool,
}

impl ConsoleEventSink {
    /// Sink on stderr; `detailed` adds per-zombie lines
    pub fn stderr(detailed: bool) -> Self {
        Self::with_writer(io::stderr(), detailed)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, detailed: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            detailed,
        }
    }
}

/// Render an event as a single log line
pub fn format_event(event: &ReconcileEvent) -> String {
    match event {
        ReconcileEvent::Started {
            source,
            record_count,
        } => format!("loaded {} records from {}", record_count, source),
        ReconcileEvent::RecordRejected { diagnostic } => format!("rejected: {}", diagnostic),
        ReconcileEvent::ZombieResolved { zombie } => {
            let how = match &zombie.resolution {
                ZombieResolution::Placeholder {
                    parent_lane,
                    reused: false,
                } => format!("placeholder created (parent in {})", parent_lane),
                ZombieResolution::Placeholder {
                    parent_lane,
                    reused: true,
                } => format!("placeholder reused (parent in {})", parent_lane),
                ZombieResolution::Attached => "attached in lane".to_string(),
                ZombieResolution::Promoted { cycle: true } => "promoted to root (cycle)".to_string(),
                ZombieResolution::Promoted { cycle: false } => {
                    "promoted to root (parent not found)".to_string()
                }
            };
            format!(
                "zombie {} [{}] -> '{}': {}",
                zombie.file_name, zombie.lane, zombie.parent, how
            )
        }
        ReconcileEvent::Completed {
            lane_counts,
            placeholder_count,
            rejected_count,
            iterations,
        } => format!(
            "board ready: private={} scheduled={} public={} placeholders={} rejected={} iterations={}",
            lane_counts[0],
            lane_counts[1],
            lane_counts[2],
            placeholder_count,
            rejected_count,
            iterations
        ),
    }
}

impl ReconcileEventSink for ConsoleEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "[pakstage] {}", format_event(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.detailed
    }
}
