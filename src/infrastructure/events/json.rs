//! JSON Event Sink
//!
//! Outputs reconcile events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};
use crate::domain::value_objects::Lane;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ReconcileEventSink for JsonEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        let json = match event {
            ReconcileEvent::Started {
                source,
                record_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": self.command,
                    "source": source,
                    "record_count": record_count,
                })
            }

            ReconcileEvent::RecordRejected { diagnostic } => {
                serde_json::json!({
                    "event": "record_rejected",
                    "command": self.command,
                    "kind": diagnostic.kind(),
                    "file_name": diagnostic.file_name(),
                    "message": diagnostic.to_string(),
                })
            }

            ReconcileEvent::ZombieResolved { zombie } => {
                serde_json::json!({
                    "event": "zombie_resolved",
                    "command": self.command,
                    "file_name": zombie.file_name,
                    "lane": zombie.lane,
                    "parent": zombie.parent,
                    "resolution": zombie.resolution,
                })
            }

            ReconcileEvent::Completed {
                lane_counts,
                placeholder_count,
                rejected_count,
                iterations,
            } => {
                let status = if rejected_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": self.command,
                    "status": status,
                    "private": lane_counts[Lane::Private.index()],
                    "scheduled": lane_counts[Lane::Scheduled.index()],
                    "public": lane_counts[Lane::Public.index()],
                    "placeholders": placeholder_count,
                    "rejected": rejected_count,
                    "iterations": iterations,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Diagnostic;
    use crate::domain::services::{Zombie, ZombieResolution};
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("board", writer);

        sink.on_event(ReconcileEvent::Started {
            source: "paks.json".to_string(),
            record_count: 5,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["command"], "board");
        assert_eq!(events[0]["record_count"], 5);
    }

    #[test]
    fn json_sink_outputs_rejection_and_zombie() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("check", writer);

        sink.on_event(ReconcileEvent::RecordRejected {
            diagnostic: Diagnostic::UnknownStatus {
                file_name: "x.pak".to_string(),
                status: "WEIRD".to_string(),
            },
        });
        sink.on_event(ReconcileEvent::ZombieResolved {
            zombie: Zombie {
                file_name: "c.pak".to_string(),
                lane: Lane::Public,
                parent: "a.pak".to_string(),
                resolution: ZombieResolution::Placeholder {
                    parent_lane: Lane::Private,
                    reused: false,
                },
            },
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "record_rejected");
        assert_eq!(events[0]["kind"], "unknown_status");
        assert_eq!(events[0]["file_name"], "x.pak");
        assert_eq!(events[1]["event"], "zombie_resolved");
        assert_eq!(events[1]["lane"], "public");
        assert_eq!(events[1]["resolution"]["kind"], "placeholder");
        assert_eq!(events[1]["resolution"]["parent_lane"], "private");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer("board", writer);

        sink.on_event(ReconcileEvent::Completed {
            lane_counts: [3, 0, 2],
            placeholder_count: 1,
            rejected_count: 0,
            iterations: 4,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["private"], 3);
        assert_eq!(events[0]["public"], 2);
    }
}
