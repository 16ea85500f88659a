//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::Path;

use crate::application::BoardUseCase;
use crate::config::Config;
use crate::domain::services::Reconciler;
use crate::infrastructure::JsonRecordSource;

/// Board use case reading a JSON file or stdin
pub type ConcreteBoardUseCase = BoardUseCase<JsonRecordSource>;

/// Create a board use case for `input` (`-` reads stdin).
///
/// The reconciler picks up the configured schedule display format.
pub fn create_board_use_case(input: &Path, config: &Config) -> ConcreteBoardUseCase {
    let reconciler =
        Reconciler::new().with_display_format(config.schedule.effective_display_format());

    BoardUseCase::new(JsonRecordSource::from_arg(input)).with_reconciler(reconciler)
}
