//! Cross-lane split report
//!
//! Every placeholder on a reconciled board marks a parent/child pair staged
//! in different lanes. This turns them into a flat list the `check` command
//! can print or serialize.

use serde::Serialize;

use crate::domain::entities::Board;
use crate::domain::value_objects::Lane;

/// A child staged in a different lane from its parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossLaneSplit {
    pub parent: String,
    pub parent_lane: Lane,
    pub child: String,
    pub child_lane: Lane,
    pub suggestion: String,
}

/// Collect one split per (placeholder, hidden child) pair, in board order.
pub fn cross_lane_splits(board: &Board) -> Vec<CrossLaneSplit> {
    let mut splits = Vec::new();

    for (child_lane, placeholder) in board.placeholders() {
        // Set on every placeholder the reconciler creates; only boards
        // assembled by hand lack it.
        let Some(parent_lane) = placeholder.stands_in_for else {
            continue;
        };

        for child in &placeholder.children {
            splits.push(CrossLaneSplit {
                parent: placeholder.file_name.clone(),
                parent_lane,
                child: child.file_name.clone(),
                child_lane,
                suggestion: format!(
                    "Move '{}' to the {} lane, or '{}' to the {} lane.",
                    placeholder.file_name, child_lane, child.file_name, parent_lane
                ),
            });
        }
    }

    splits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PackageRecord, PakNode};
    use crate::domain::services::{reconcile, ZombieResolution};

    #[test]
    fn no_splits_on_consistent_board() {
        let records = vec![
            PackageRecord::new("base", "PUBLIC"),
            PackageRecord::new("dlc", "PUBLIC").with_parent("base"),
        ];
        assert!(cross_lane_splits(&reconcile(&records).board).is_empty());
    }

    #[test]
    fn one_split_per_hidden_child() {
        let records = vec![
            PackageRecord::new("base", "PRIVATE"),
            PackageRecord::new("c1", "PUBLIC").with_parent("base"),
            PackageRecord::new("c2", "PUBLIC").with_parent("base"),
        ];
        let splits = cross_lane_splits(&reconcile(&records).board);

        assert_eq!(splits.len(), 2);
        assert_eq!(splits[0].parent, "base");
        assert_eq!(splits[0].parent_lane, Lane::Private);
        assert_eq!(splits[0].child, "c1");
        assert_eq!(splits[0].child_lane, Lane::Public);
        assert_eq!(
            splits[0].suggestion,
            "Move 'base' to the Public lane, or 'c1' to the Private lane."
        );
        assert_eq!(splits[1].child, "c2");
    }

    #[test]
    fn parent_lane_follows_placeholder_source_when_names_repeat() {
        let records = vec![
            PackageRecord::new("A", "WINDOW"),
            PackageRecord::new("A", "PRIVATE"),
            PackageRecord::new("C", "PUBLIC").with_parent("A"),
        ];
        let result = reconcile(&records);
        let splits = cross_lane_splits(&result.board);

        assert_eq!(splits.len(), 1);
        assert_eq!(splits[0].parent_lane, Lane::Scheduled);
        assert_eq!(
            result.zombies[0].resolution,
            ZombieResolution::Placeholder {
                parent_lane: Lane::Scheduled,
                reused: false
            }
        );
        assert_eq!(
            splits[0].suggestion,
            "Move 'A' to the Public lane, or 'C' to the Scheduled lane."
        );
    }

    #[test]
    fn hand_built_placeholder_without_source_is_skipped() {
        let mut ghost = PakNode::from_record(&PackageRecord::new("A", "PRIVATE"), "PRIVATE");
        ghost.is_missing = true;
        ghost
            .children
            .push(PakNode::from_record(&PackageRecord::new("C", "PUBLIC"), "PUBLIC"));
        let mut board = Board::new();
        board.lane_mut(Lane::Public).roots.push(ghost);

        assert!(cross_lane_splits(&board).is_empty());
    }
}
