use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use pakstage::application::BoardResult;
use pakstage::config::Config;
use pakstage::presentation::create_board_use_case;

use crate::commands::event_sink;
use crate::ui::ci::{github_actions_annotation, github_actions_enabled, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, CheckDataEvent};
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

/// Exit status of `check`: rejected records always fail, splits only when strict.
pub fn has_issues(result: &BoardResult, strict_warnings: bool) -> bool {
    if strict_warnings {
        !result.is_consistent()
    } else {
        !result.is_clean()
    }
}

pub fn cmd_check(
    input: &Path,
    strict_warnings: bool,
    config: &Config,
    ui: &UiContext,
) -> Result<ExitCode> {
    let result = create_board_use_case(input, config)
        .execute_with_events(event_sink(ui, "check"))
        .with_context(|| format!("failed to check {}", input.display()))?;

    let failed = has_issues(&result, strict_warnings);

    if ui.json {
        emit_event(&CheckDataEvent::new(
            &result.source,
            !failed,
            &result.diagnostics,
            &result.splits,
        ))?;
    } else {
        if !ui.quiet {
            print!(
                "{}",
                render_check_header(&result.source, strict_warnings, ui.color, ui.unicode)
            );
        }

        if ui.caps.is_ci && github_actions_enabled(|k| std::env::var(k).ok()) {
            print_annotations(&result, strict_warnings);
        }

        print!("{}", render_check_report(&result, ui.color, ui.unicode));
        print!(
            "{}",
            render_check_summary(&result, failed, ui.color, ui.unicode)
        );
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn print_annotations(result: &BoardResult, strict_warnings: bool) {
    let split_level = if strict_warnings {
        AnnotationLevel::Error
    } else {
        AnnotationLevel::Warning
    };

    for diagnostic in &result.diagnostics {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &diagnostic.to_string(),
                Some(&result.source),
                Some("pakstage"),
            )
        );
    }
    for split in &result.splits {
        println!(
            "{}",
            github_actions_annotation(
                split_level,
                &split.suggestion,
                Some(&result.source),
                Some("pakstage"),
            )
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakstage::application::BoardUseCase;
    use pakstage::domain::entities::PackageRecord;
    use pakstage::domain::ports::StaticRecordSource;

    fn run(records: Vec<PackageRecord>) -> BoardResult {
        BoardUseCase::new(StaticRecordSource::new(records))
            .execute()
            .unwrap()
    }

    #[test]
    fn splits_fail_only_when_strict() {
        let result = run(vec![
            PackageRecord::new("base", "PRIVATE"),
            PackageRecord::new("dlc", "PUBLIC").with_parent("base"),
        ]);
        assert!(!has_issues(&result, false));
        assert!(has_issues(&result, true));
    }

    #[test]
    fn rejected_records_always_fail() {
        let result = run(vec![PackageRecord::new("x", "ARCHIVED")]);
        assert!(has_issues(&result, false));
        assert!(has_issues(&result, true));
    }
}
