//! Property tests for the hierarchy reconciler.

use std::collections::HashMap;

use proptest::prelude::*;

use pakstage::domain::entities::{PackageRecord, PakNode};
use pakstage::domain::services::{
    reconcile, Reconciler, HIDDEN_TEXT, MISSING_DESCENDANT_CLASS, MISSING_PARENT_CLASS,
};
use pakstage::domain::value_objects::{Lane, Timestamp};
use pakstage::Board;

const NAMES: &[&str] = &["a", "b", "c", "d", "e", "f", "g"];

fn name() -> impl Strategy<Value = String> {
    prop::sample::select(NAMES).prop_map(str::to_string)
}

fn status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => prop::sample::select(&["PRIVATE", "private", "WINDOW", "Window", "PUBLIC", "public"][..])
            .prop_map(|s| Some(s.to_string())),
        1 => Just(None),
        1 => Just(Some(String::new())),
        1 => Just(Some("ARCHIVED".to_string())),
        1 => Just(Some(" PUBLIC".to_string())),
    ]
}

fn parent() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        5 => name().prop_map(Some),
        1 => Just(Some("ghost".to_string())),
        1 => Just(Some(String::new())),
    ]
}

fn record() -> impl Strategy<Value = PackageRecord> {
    (name(), status(), parent(), proptest::option::of(1i64..2_000_000_000)).prop_map(
        |(name, status, parent, start)| {
            let mut record = match status {
                Some(status) => PackageRecord::new(name, status),
                None => PackageRecord::without_status(name),
            };
            if let Some(parent) = parent {
                record = record.with_parent(parent);
            }
            record.with_window(start.map(|s| Timestamp::Epoch(s as f64)), None)
        },
    )
}

fn records() -> impl Strategy<Value = Vec<PackageRecord>> {
    proptest::collection::vec(record(), 0..24)
}

/// (lane, depth, node) for every node on the board, pre-order
fn flatten(board: &Board) -> Vec<(Lane, usize, &PakNode)> {
    fn visit<'a>(lane: Lane, depth: usize, node: &'a PakNode, out: &mut Vec<(Lane, usize, &'a PakNode)>) {
        out.push((lane, depth, node));
        for child in &node.children {
            visit(lane, depth + 1, child, out);
        }
    }

    let mut out = Vec::new();
    for forest in board.lanes() {
        for root in &forest.roots {
            visit(forest.lane, 0, root, &mut out);
        }
    }
    out
}

fn real_lane_names(board: &Board) -> Vec<(Lane, String)> {
    let mut names: Vec<(Lane, String)> = flatten(board)
        .into_iter()
        .filter(|(_, _, node)| !node.is_missing)
        .map(|(lane, _, node)| (lane, node.file_name.clone()))
        .collect();
    names.sort();
    names
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record with a known status is placed exactly once, in
    /// its own lane; every other record yields one diagnostic.
    #[test]
    fn property_every_classified_record_placed_once(records in records()) {
        let result = reconcile(&records);

        let mut expected: Vec<(Lane, String)> = records
            .iter()
            .filter_map(|r| r.lane().map(|lane| (lane, r.file_name.clone())))
            .collect();
        expected.sort();

        prop_assert_eq!(real_lane_names(&result.board), expected.clone());
        prop_assert_eq!(result.board.real_node_count(), expected.len());
        prop_assert_eq!(result.diagnostics.len(), records.len() - expected.len());
    }

    /// PROPERTY: parentless records are exactly the non-placeholder roots
    /// without a parent reference.
    #[test]
    fn property_parentless_records_are_roots(records in records()) {
        let result = reconcile(&records);

        for lane in Lane::ALL {
            let parentless = records
                .iter()
                .filter(|r| r.lane() == Some(lane) && r.parent_name().is_none())
                .count();
            let bare_roots = result
                .board
                .lane(lane)
                .roots
                .iter()
                .filter(|n| !n.is_missing && n.parent.as_deref().map_or(true, str::is_empty))
                .count();
            prop_assert_eq!(parentless, bare_roots, "lane {}", lane);
        }

        for (_, depth, node) in flatten(&result.board) {
            if depth > 0 {
                prop_assert!(node.parent.as_deref().is_some_and(|p| !p.is_empty()));
            }
        }
    }

    /// PROPERTY: every child sits under a node carrying its parent's name.
    #[test]
    fn property_children_sit_under_their_parent(records in records()) {
        let result = reconcile(&records);

        for (_, _, node) in flatten(&result.board) {
            for child in &node.children {
                prop_assert_eq!(child.parent.as_deref(), Some(node.file_name.as_str()));
                if !node.is_missing {
                    prop_assert!(child.checked);
                }
            }
        }
    }

    /// PROPERTY: placeholders are roots standing in for a real node of
    /// another lane, unique per (lane, name), and only hold hidden children.
    #[test]
    fn property_placeholders_mirror_cross_lane_parents(records in records()) {
        let result = reconcile(&records);
        let nodes = flatten(&result.board);
        let mut seen: HashMap<(Lane, String), usize> = HashMap::new();

        for (lane, depth, node) in &nodes {
            if !node.is_missing {
                continue;
            }
            prop_assert_eq!(*depth, 0);
            prop_assert_eq!(node.class_name.as_deref(), Some(MISSING_PARENT_CLASS));
            prop_assert!(!node.children.is_empty());
            *seen.entry((*lane, node.file_name.clone())).or_default() += 1;

            for child in &node.children {
                prop_assert_eq!(child.secondary_text.as_deref(), Some(HIDDEN_TEXT));
                prop_assert_eq!(child.class_name.as_deref(), Some(MISSING_DESCENDANT_CLASS));
            }

            let real_elsewhere = nodes.iter().any(|(other_lane, _, other)| {
                other_lane != lane
                    && !other.is_missing
                    && other.file_name == node.file_name
                    && other.is_missing_parent
            });
            prop_assert!(real_elsewhere, "placeholder {} has no real parent", node.file_name);
        }

        prop_assert!(seen.values().all(|&count| count == 1));
    }

    /// PROPERTY: reconciling the same listing twice gives the same result.
    #[test]
    fn property_reconcile_is_deterministic(records in records()) {
        prop_assert_eq!(reconcile(&records), reconcile(&records));
    }

    /// PROPERTY: branching never spends more than N*N + 1 pops.
    #[test]
    fn property_iterations_bounded(records in records()) {
        let result = reconcile(&records);
        prop_assert!(result.iterations <= Reconciler::iteration_cap(records.len()));
    }

    /// PROPERTY: the Public lane never carries a staging window.
    #[test]
    fn property_public_lane_unscheduled(records in records()) {
        let result = reconcile(&records);
        for (lane, _, node) in flatten(&result.board) {
            if lane == Lane::Public && !node.is_missing {
                prop_assert!(node.scheduled_date_time.is_none());
            }
        }
    }

    /// PROPERTY: a record with an unknown status is reported and leaves the
    /// placement of every other record unchanged.
    #[test]
    fn property_unknown_status_is_isolated(records in records(), at in 0usize..24) {
        let baseline = reconcile(&records);

        let mut with_unknown = records.clone();
        let at = at.min(with_unknown.len());
        with_unknown.insert(at, PackageRecord::new("zz-unknown", "RETIRED"));
        let result = reconcile(&with_unknown);

        prop_assert_eq!(real_lane_names(&result.board), real_lane_names(&baseline.board));
        prop_assert!(result.board.find("zz-unknown").is_empty());
        prop_assert_eq!(result.diagnostics.len(), baseline.diagnostics.len() + 1);
    }
}
