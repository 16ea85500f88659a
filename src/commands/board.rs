use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use pakstage::config::Config;
use pakstage::presentation::create_board_use_case;

use crate::commands::event_sink;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, BoardDataEvent};
use crate::ui::views::board::{render_board, render_board_header, render_board_summary};

pub fn cmd_board(input: &Path, config: &Config, ui: &UiContext) -> Result<ExitCode> {
    let result = create_board_use_case(input, config)
        .execute_with_events(event_sink(ui, "board"))
        .with_context(|| format!("failed to build board from {}", input.display()))?;

    if ui.json {
        emit_event(&BoardDataEvent::new(&result.source, &result.board))?;
        return Ok(ExitCode::SUCCESS);
    }

    if !ui.quiet {
        print!("{}", render_board_header(&result.source, ui.color, ui.unicode));
    }
    print!("{}", render_board(&result.board, ui.color, ui.unicode));
    if !ui.quiet {
        print!("{}", render_board_summary(&result, ui.color, ui.unicode));
    }

    Ok(ExitCode::SUCCESS)
}
