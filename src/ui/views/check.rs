use pakstage::application::BoardResult;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(
    source: &str,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Pakstage Check");
    header.add("Source", source);
    if strict_warnings {
        header.add("Strict", "failing on cross-lane splits");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    result: &BoardResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !result.diagnostics.is_empty() {
        out.push_str(&ColoredText::plain("Rejected records").bold().render(supports_color));
        out.push('\n');
        for diagnostic in &result.diagnostics {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error(diagnostic.to_string()).render(supports_color)
            ));
        }
        out.push('\n');
    }

    if !result.splits.is_empty() {
        out.push_str(&ColoredText::plain("Cross-lane splits").bold().render(supports_color));
        out.push('\n');
        for split in &result.splits {
            out.push_str(&format!(
                "  {} '{}' ({}) is hidden under a placeholder for '{}' ({})\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                split.child,
                split.child_lane,
                split.parent,
                split.parent_lane
            ));
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim(split.suggestion.as_str()).render(supports_color)
            ));
        }
        out.push('\n');
    }

    out
}

pub fn render_check_summary(
    result: &BoardResult,
    has_issues: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if has_issues {
        "Check FAILED"
    } else if !result.splits.is_empty() {
        "Check passed with warnings"
    } else {
        "All checks passed"
    };

    let mut summary = if has_issues || !result.splits.is_empty() {
        ResultSummary::partial(title)
    } else {
        ResultSummary::success(title)
    };

    summary.add_stat("entries read", result.entry_count);
    summary.add_stat("records rejected", result.diagnostics.len());
    summary.add_stat("cross-lane splits", result.splits.len());
    if has_issues {
        summary.with_next_step("Fix the listing above and run `pakstage check` again");
    }

    summary.render(supports_color, supports_unicode)
}
