//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod reconciler;
mod splits;

pub use reconciler::{
    reconcile, Reconciler, Reconciliation, Zombie, ZombieResolution, HIDDEN_TEXT,
    MISSING_DESCENDANT_CLASS, MISSING_PARENT_CLASS,
};
pub use splits::{cross_lane_splits, CrossLaneSplit};
