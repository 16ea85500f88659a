use std::rc::Rc;

use pakstage::application::BoardResult;
use pakstage::domain::entities::{Board, PakNode};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

struct TreeGlyphs {
    branch: &'static str,
    last: &'static str,
    pipe: &'static str,
    space: &'static str,
}

impl TreeGlyphs {
    fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                branch: theme::tree::BRANCH,
                last: theme::tree::LAST,
                pipe: theme::tree::PIPE,
                space: theme::tree::SPACE,
            }
        } else {
            Self {
                branch: theme::tree_ascii::BRANCH,
                last: theme::tree_ascii::LAST,
                pipe: theme::tree_ascii::PIPE,
                space: theme::tree_ascii::SPACE,
            }
        }
    }
}

pub fn render_board_header(source: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Board, "Pakstage Board");
    header.add("Source", source);
    header.render(supports_color, supports_unicode)
}

/// Three lanes in board order, each as an indented forest.
pub fn render_board(board: &Board, supports_color: bool, supports_unicode: bool) -> String {
    let glyphs = TreeGlyphs::new(supports_unicode);
    let mut out = String::new();

    for forest in board.lanes() {
        let heading = format!("{} ({})", forest.lane.display_name(), forest.node_count());
        out.push_str(&ColoredText::info(heading).bold().render(supports_color));
        out.push('\n');

        if forest.is_empty() {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim("(empty)").render(supports_color)
            ));
        }

        render_forest(&mut out, &forest.roots, &glyphs, supports_color);
        out.push('\n');
    }

    out
}

/// Levels drawn with connectors; deeper nodes share the last indent and
/// carry their depth in the label.
const MAX_INDENT_DEPTH: usize = 32;

struct Pending<'a> {
    node: &'a PakNode,
    prefix: Rc<str>,
    is_last: bool,
    depth: usize,
}

fn render_forest(out: &mut String, roots: &[PakNode], glyphs: &TreeGlyphs, supports_color: bool) {
    let root_prefix: Rc<str> = Rc::from("");
    let mut stack: Vec<Pending<'_>> = roots
        .iter()
        .enumerate()
        .rev()
        .map(|(i, node)| Pending {
            node,
            prefix: Rc::clone(&root_prefix),
            is_last: i + 1 == roots.len(),
            depth: 1,
        })
        .collect();

    while let Some(Pending {
        node,
        prefix,
        is_last,
        depth,
    }) = stack.pop()
    {
        let connector = if is_last { glyphs.last } else { glyphs.branch };
        out.push_str(&prefix);
        out.push_str(connector);
        if depth > MAX_INDENT_DEPTH {
            out.push_str(&ColoredText::dim(format!("[depth {}] ", depth)).render(supports_color));
        }
        out.push_str(&node_label(node, supports_color));
        out.push('\n');

        let child_prefix = if depth >= MAX_INDENT_DEPTH {
            prefix
        } else {
            let glyph = if is_last { glyphs.space } else { glyphs.pipe };
            Rc::from(format!("{}{}", prefix, glyph))
        };
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push(Pending {
                node: child,
                prefix: Rc::clone(&child_prefix),
                is_last: i + 1 == count,
                depth: depth + 1,
            });
        }
    }
}

fn node_label(node: &PakNode, supports_color: bool) -> String {
    let mut label = if node.is_missing {
        format!(
            "{} {}",
            ColoredText::warning(node.file_name.as_str()).render(supports_color),
            ColoredText::warning("(missing)").render(supports_color)
        )
    } else {
        node.file_name.clone()
    };

    if let Some(secondary) = &node.secondary_text {
        label.push(' ');
        label.push_str(&ColoredText::dim(secondary.as_str()).render(supports_color));
    }
    if let Some(window) = &node.scheduled_date_time {
        label.push(' ');
        label.push_str(&ColoredText::dim(format!("[{}]", window)).render(supports_color));
    }
    if let Some(sub) = &node.sub_text {
        label.push_str("  ");
        label.push_str(&ColoredText::dim(sub.as_str()).render(supports_color));
    }

    label
}

pub fn render_board_summary(
    result: &BoardResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let placeholders = result.board.placeholders().len();
    let mut summary = if result.is_consistent() {
        ResultSummary::success("Board ready")
    } else {
        ResultSummary::partial("Board ready with issues")
    };

    summary.add_stat("paks placed", result.board.real_node_count());
    if placeholders > 0 {
        summary.add_stat("placeholder parents", placeholders);
    }
    if !result.diagnostics.is_empty() {
        summary.add_warning(format!("{} records rejected", result.diagnostics.len()));
    }
    if !result.splits.is_empty() {
        summary.add_warning(format!(
            "{} children hidden from a parent in another lane",
            result.splits.len()
        ));
        summary.with_next_step("Run `pakstage check` for the fixes");
    }

    summary.render(supports_color, supports_unicode)
}
