//! PakNode entity - a record placed on the board
//!
//! Serialized in camelCase for the swim-lane renderer. Presentation fields
//! that are unset are omitted.

use serde::Serialize;

use super::PackageRecord;
use crate::domain::value_objects::{Lane, Timestamp};

/// A package record enriched with its children and board annotations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PakNode {
    pub file_name: String,
    pub staging_status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_start: Option<Timestamp>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging_end: Option<Timestamp>,

    /// Staging-window annotation (never set on public paks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date_time: Option<String>,

    pub children: Vec<PakNode>,

    /// Attached under a real parent
    pub checked: bool,

    /// Synthetic stand-in for a parent staged in another lane
    #[serde(skip_serializing_if = "is_false")]
    pub is_missing: bool,

    /// A child of this pak is staged in another lane
    #[serde(skip_serializing_if = "is_false")]
    pub is_missing_parent: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_class_names: Vec<String>,

    /// Lane of the real parent a placeholder stands in for
    #[serde(skip)]
    pub stands_in_for: Option<Lane>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl PakNode {
    /// Build an unattached node from a record whose status is known.
    pub fn from_record(record: &PackageRecord, staging_status: &str) -> Self {
        Self {
            file_name: record.file_name.clone(),
            staging_status: staging_status.to_string(),
            parent: record.parent_name().map(str::to_string),
            staging_start: record.staging_start.clone(),
            staging_end: record.staging_end.clone(),
            scheduled_date_time: None,
            children: Vec::new(),
            checked: false,
            is_missing: false,
            is_missing_parent: false,
            secondary_text: None,
            sub_text: None,
            class_name: None,
            status_class_names: Vec::new(),
            stands_in_for: None,
        }
    }

    /// Depth-first, pre-order search of this subtree
    pub fn find(&self, file_name: &str) -> Option<&PakNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.file_name == file_name {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        let mut len = 0;
        self.walk(&mut |_| len += 1);
        len
    }

    /// Visit this subtree in pre-order
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a PakNode)) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.iter().rev());
        }
    }

    /// Length of the longest root-to-leaf path, counting this node
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        deepest
    }
}

// Parent chains can be arbitrarily long; unlink them level by level so
// dropping a board never recurses.
impl Drop for PakNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}
