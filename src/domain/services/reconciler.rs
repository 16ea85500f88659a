//! Hierarchy reconciler
//!
//! Rebuilds the staging board from a flat package listing:
//!
//! 1. classification: roots are grounded in their lane, children are queued
//! 2. branching: queued children are hung under a same-lane parent, retrying
//!    until the queue drains or `N*N + 1` pops have been spent
//! 3. zombie resolution: leftovers get a placeholder parent, a same-lane
//!    parent, or become roots
//! 4. the arena is materialized into owned lane forests
//!
//! The reconciler is pure. Records it cannot place are returned as
//! [`Diagnostic`]s; emitting them is the caller's job.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::domain::entities::{Board, Diagnostic, PackageRecord, PakNode};
use crate::domain::value_objects::{scheduled_date_time, Lane, DEFAULT_DISPLAY_FORMAT};

/// Secondary text of a child whose parent lives in another lane
pub const HIDDEN_TEXT: &str = "(Hidden)";

/// Class of a child whose parent lives in another lane (board stylesheet name)
pub const MISSING_DESCENDANT_CLASS: &str = "missing-decendant";

/// Class of a placeholder parent
pub const MISSING_PARENT_CLASS: &str = "missing-parent";

/// How a zombie was placed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ZombieResolution {
    /// Hung under a placeholder for a parent staged in `parent_lane`
    Placeholder { parent_lane: Lane, reused: bool },
    /// Parent found in the same lane after branching gave up
    Attached,
    /// Made a root: the parent is unknown, or attaching would close a cycle
    Promoted { cycle: bool },
}

/// A queued child that branching could not place
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zombie {
    pub file_name: String,
    pub lane: Lane,
    pub parent: String,
    pub resolution: ZombieResolution,
}

/// Output of one reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub board: Board,
    pub diagnostics: Vec<Diagnostic>,
    pub zombies: Vec<Zombie>,
    /// Queue pops accounted for by the branching pass
    pub iterations: usize,
}

/// Rebuilds lane forests from package records
#[derive(Debug, Clone)]
pub struct Reconciler {
    display_format: String,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self {
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// chrono format used for `scheduledDateTime`
    pub fn with_display_format(mut self, display_format: impl Into<String>) -> Self {
        self.display_format = display_format.into();
        self
    }

    /// Upper bound on branching pops for `record_count` records
    pub fn iteration_cap(record_count: usize) -> usize {
        record_count.saturating_mul(record_count).saturating_add(1)
    }

    pub fn reconcile(&self, records: &[PackageRecord]) -> Reconciliation {
        let mut arena = Arena::default();
        let mut diagnostics = Vec::new();
        let mut pending: VecDeque<usize> = VecDeque::new();

        // 1) Classification
        for record in records {
            let Some(status) = record.status() else {
                diagnostics.push(Diagnostic::MissingStatus {
                    file_name: record.file_name.clone(),
                });
                continue;
            };
            let Some(lane) = Lane::from_status(status) else {
                diagnostics.push(Diagnostic::UnknownStatus {
                    file_name: record.file_name.clone(),
                    status: status.to_string(),
                });
                continue;
            };

            let mut node = PakNode::from_record(record, status);
            if lane.is_scheduling_lane() {
                node.scheduled_date_time = scheduled_date_time(
                    record.staging_start.as_ref(),
                    record.staging_end.as_ref(),
                    &self.display_format,
                );
            }

            let idx = arena.push(node, lane);
            if record.parent_name().is_some() {
                pending.push_back(idx);
            } else {
                arena.add_root(lane, idx);
            }
        }

        // 2) Branching
        let cap = Self::iteration_cap(records.len());
        let mut iterations = 0;
        let mut stalled = 0;
        while iterations < cap {
            let Some(idx) = pending.pop_front() else {
                break;
            };
            iterations += 1;

            let lane = arena.slots[idx].lane;
            let found = arena.find_in_lane(lane, arena.parent_name(idx));
            match found {
                Some(parent) => {
                    arena.attach(idx, parent);
                    arena.slots[idx].node.checked = true;
                    stalled = 0;
                }
                None => {
                    pending.push_back(idx);
                    stalled += 1;
                    if stalled >= pending.len() {
                        // The forest can no longer change; spend the rest
                        // of the budget as a plain rotation.
                        let remaining = cap - iterations;
                        pending.rotate_left(remaining % pending.len());
                        iterations = cap;
                    }
                }
            }
        }

        // 3) Zombie resolution
        let mut first_by_name: HashMap<String, usize> = HashMap::new();
        for (idx, slot) in arena.slots.iter().enumerate() {
            first_by_name
                .entry(slot.node.file_name.clone())
                .or_insert(idx);
        }

        let mut zombies = Vec::with_capacity(pending.len());
        for idx in pending {
            let lane = arena.slots[idx].lane;
            let parent_name = arena.parent_name(idx).to_string();

            let resolution = match first_by_name.get(&parent_name).copied() {
                Some(parent) if arena.slots[parent].lane != lane => {
                    let parent_lane = arena.slots[parent].lane;
                    let (placeholder, reused) = arena.placeholder_for(lane, parent);
                    arena.attach(idx, placeholder);
                    arena.slots[parent].node.is_missing_parent = true;

                    let zombie = &mut arena.slots[idx].node;
                    zombie.secondary_text = Some(HIDDEN_TEXT.to_string());
                    zombie.sub_text = Some(format!(
                        "Parent '{}' is staged in the {} lane.",
                        parent_name, parent_lane
                    ));
                    zombie.class_name = Some(MISSING_DESCENDANT_CLASS.to_string());

                    ZombieResolution::Placeholder {
                        parent_lane,
                        reused,
                    }
                }
                Some(parent) if !arena.is_within(parent, idx) => {
                    arena.attach(idx, parent);
                    arena.slots[idx].node.checked = true;
                    ZombieResolution::Attached
                }
                Some(_) => {
                    arena.add_root(lane, idx);
                    ZombieResolution::Promoted { cycle: true }
                }
                None => {
                    arena.add_root(lane, idx);
                    ZombieResolution::Promoted { cycle: false }
                }
            };

            zombies.push(Zombie {
                file_name: arena.slots[idx].node.file_name.clone(),
                lane,
                parent: parent_name,
                resolution,
            });
        }

        // 4) Result
        Reconciliation {
            board: arena.into_board(),
            diagnostics,
            zombies,
            iterations,
        }
    }
}

/// Reconcile with default options
pub fn reconcile(records: &[PackageRecord]) -> Reconciliation {
    Reconciler::new().reconcile(records)
}

struct Slot {
    node: PakNode,
    lane: Lane,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Reachable from a root of its lane
    grounded: bool,
}

/// Index-based working tree; `PakNode::children` stays empty until
/// `into_board`.
#[derive(Default)]
struct Arena {
    slots: Vec<Slot>,
    roots: [Vec<usize>; 3],
    /// Slots per file name, one map per lane
    by_name: [HashMap<String, Vec<usize>>; 3],
}

impl Arena {
    fn push(&mut self, node: PakNode, lane: Lane) -> usize {
        let idx = self.slots.len();
        self.by_name[lane.index()]
            .entry(node.file_name.clone())
            .or_default()
            .push(idx);
        self.slots.push(Slot {
            node,
            lane,
            parent: None,
            children: Vec::new(),
            grounded: false,
        });
        idx
    }

    fn add_root(&mut self, lane: Lane, idx: usize) {
        self.roots[lane.index()].push(idx);
        self.slots[idx].grounded = true;
    }

    fn attach(&mut self, child: usize, parent: usize) {
        self.slots[child].parent = Some(parent);
        self.slots[child].grounded = self.slots[parent].grounded;
        self.slots[parent].children.push(child);
    }

    fn parent_name(&self, idx: usize) -> &str {
        self.slots[idx].node.parent.as_deref().unwrap_or_default()
    }

    /// First node named `file_name` in a pre-order walk of one lane's forest.
    ///
    /// Branching only ever attaches below grounded nodes, so an unattached
    /// slot has no children and a name held by a single slot is found
    /// exactly when that slot is grounded.
    fn find_in_lane(&self, lane: Lane, file_name: &str) -> Option<usize> {
        match self.by_name[lane.index()].get(file_name).map(Vec::as_slice) {
            None | Some([]) => None,
            Some([only]) => self.slots[*only].grounded.then_some(*only),
            Some(_) => self.search_lane(lane, file_name),
        }
    }

    fn search_lane(&self, lane: Lane, file_name: &str) -> Option<usize> {
        let mut stack: Vec<usize> = self.roots[lane.index()].iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            if self.slots[idx].node.file_name == file_name {
                return Some(idx);
            }
            stack.extend(self.slots[idx].children.iter().rev().copied());
        }
        None
    }

    /// Whether `idx` is `ancestor` or sits below it
    fn is_within(&self, idx: usize, ancestor: usize) -> bool {
        let mut cursor = Some(idx);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.slots[current].parent;
        }
        false
    }

    /// Placeholder root for `parent` in `lane`, creating it when absent.
    /// Returns the placeholder and whether it already existed.
    fn placeholder_for(&mut self, lane: Lane, parent: usize) -> (usize, bool) {
        let name = &self.slots[parent].node.file_name;
        let existing = self.roots[lane.index()].iter().copied().find(|&r| {
            let root = &self.slots[r].node;
            root.is_missing && root.file_name == *name
        });
        if let Some(idx) = existing {
            return (idx, true);
        }

        let real_lane = self.slots[parent].lane;
        let mut ghost = self.slots[parent].node.clone();
        ghost.children.clear();
        ghost.checked = false;
        ghost.is_missing = true;
        ghost.is_missing_parent = true;
        ghost.secondary_text = None;
        ghost.sub_text = Some(format!(
            "Fix: Drag '{0}' to this pak or this pak to the '{0}'.",
            ghost.file_name
        ));
        ghost.class_name = Some(MISSING_PARENT_CLASS.to_string());
        ghost.status_class_names = vec!["missing".to_string(), real_lane.key().to_lowercase()];
        ghost.stands_in_for = Some(real_lane);

        let idx = self.push(ghost, lane);
        self.add_root(lane, idx);
        (idx, false)
    }

    fn into_board(self) -> Board {
        let Arena { slots, roots, .. } = self;
        let mut children = Vec::with_capacity(slots.len());
        let mut nodes = Vec::with_capacity(slots.len());
        for slot in slots {
            children.push(slot.children);
            nodes.push(Some(slot.node));
        }
        let mut built: Vec<Option<PakNode>> = Vec::new();
        built.resize_with(nodes.len(), || None);

        let mut board = Board::new();
        for lane in Lane::ALL {
            for &root in &roots[lane.index()] {
                if let Some(node) = build(root, &mut nodes, &mut built, &children) {
                    board.lane_mut(lane).roots.push(node);
                }
            }
        }
        board
    }
}

/// Assemble the owned subtree under `root`, children before parents.
fn build(
    root: usize,
    nodes: &mut [Option<PakNode>],
    built: &mut [Option<PakNode>],
    children: &[Vec<usize>],
) -> Option<PakNode> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        order.push(idx);
        stack.extend(children[idx].iter().copied());
    }

    for &idx in order.iter().rev() {
        if let Some(mut node) = nodes[idx].take() {
            node.children = children[idx]
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[idx] = Some(node);
        }
    }

    built[root].take()
}
