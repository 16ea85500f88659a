//! Board entity - the three staging lanes and their forests

use serde::Serialize;

use super::PakNode;
use crate::domain::value_objects::Lane;

/// Roots of one lane, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneForest {
    pub lane: Lane,
    pub key: &'static str,
    pub roots: Vec<PakNode>,
}

impl LaneForest {
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            key: lane.key(),
            roots: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Nodes in this lane, placeholders included
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(PakNode::subtree_len).sum()
    }
}

/// Reconciled staging board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    lanes: [LaneForest; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            lanes: Lane::ALL.map(LaneForest::new),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forest of a single lane
    pub fn lane(&self, lane: Lane) -> &LaneForest {
        &self.lanes[lane.index()]
    }

    pub(crate) fn lane_mut(&mut self, lane: Lane) -> &mut LaneForest {
        &mut self.lanes[lane.index()]
    }

    /// All lanes in board order (Private, Scheduled, Public)
    pub fn lanes(&self) -> &[LaneForest] {
        &self.lanes
    }

    /// Every node with this file name, with the lane it sits in (pre-order)
    pub fn find(&self, file_name: &str) -> Vec<(Lane, &PakNode)> {
        let mut found = Vec::new();
        for forest in &self.lanes {
            for root in &forest.roots {
                root.walk(&mut |node| {
                    if node.file_name == file_name {
                        found.push((forest.lane, node));
                    }
                });
            }
        }
        found
    }

    /// Nodes on the board, placeholders included
    pub fn node_count(&self) -> usize {
        self.lanes.iter().map(LaneForest::node_count).sum()
    }

    /// Nodes on the board that stand for an input record
    pub fn real_node_count(&self) -> usize {
        self.node_count() - self.placeholders().len()
    }

    /// Placeholder roots with the lane each one sits in
    pub fn placeholders(&self) -> Vec<(Lane, &PakNode)> {
        self.lanes
            .iter()
            .flat_map(|forest| {
                forest
                    .roots
                    .iter()
                    .filter(|root| root.is_missing)
                    .map(move |root| (forest.lane, root))
            })
            .collect()
    }
}
