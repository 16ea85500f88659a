//! Subcommand implementations

pub mod board;
pub mod check;

use std::sync::Arc;

use pakstage::domain::ports::{NoopEventSink, ReconcileEventSink};
use pakstage::infrastructure::{ConsoleEventSink, JsonEventSink};

use crate::ui::context::UiContext;

/// NDJSON on stdout for `--json`, stderr lines for `-v`, nothing otherwise.
/// `-vv` adds one line per zombie.
pub(crate) fn event_sink(ui: &UiContext, command: &'static str) -> Arc<dyn ReconcileEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else if ui.verbose > 0 {
        Arc::new(ConsoleEventSink::stderr(ui.verbose > 1))
    } else {
        Arc::new(NoopEventSink)
    }
}
