//! Lane value object - the three fixed staging buckets
//!
//! - `Private`: uploaded, visible to nobody
//! - `Scheduled`: visible inside a staging window (wire key `WINDOW`)
//! - `Public`: visible to every client

use serde::{Deserialize, Serialize};

/// Staging lane of a pak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Private,
    Scheduled,
    Public,
}

impl Lane {
    /// All lanes in board order
    pub const ALL: [Lane; 3] = [Lane::Private, Lane::Scheduled, Lane::Public];

    /// Upper-case staging-status key this lane matches
    pub fn key(&self) -> &'static str {
        match self {
            Lane::Private => "PRIVATE",
            Lane::Scheduled => "WINDOW",
            Lane::Public => "PUBLIC",
        }
    }

    /// Human-readable lane name
    pub fn display_name(&self) -> &'static str {
        match self {
            Lane::Private => "Private",
            Lane::Scheduled => "Scheduled",
            Lane::Public => "Public",
        }
    }

    /// Position of this lane on the board
    pub fn index(&self) -> usize {
        match self {
            Lane::Private => 0,
            Lane::Scheduled => 1,
            Lane::Public => 2,
        }
    }

    /// Match a raw staging status against the lane keys.
    ///
    /// The status is upper-cased but not trimmed.
    pub fn from_status(status: &str) -> Option<Self> {
        let upper = status.to_uppercase();
        Lane::ALL.into_iter().find(|lane| lane.key() == upper)
    }

    /// Whether records in this lane carry a staging-window annotation
    pub fn is_scheduling_lane(&self) -> bool {
        !matches!(self, Lane::Public)
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
