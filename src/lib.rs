//! pakstage - staging-board reconciler for dynamic content paks
//!
//! A content backend lists every pak with a staging status (Private,
//! Scheduled, Public) and an optional parent. pakstage turns that flat list
//! into three lane forests, keeping parent/child links even when the two
//! ends live in different lanes.
//!
//! ## Architecture
//!
//! - `domain` - lanes, records, nodes, the reconciler, ports
//! - `application` - the board use case
//! - `infrastructure` - JSON record sources and event sinks
//! - `config` - TOML configuration
//! - `presentation` - CLI model and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BoardResult, BoardUseCase};
pub use config::Config;
pub use domain::entities::{Board, Diagnostic, LaneForest, PakNode, PackageRecord};
pub use domain::services::{reconcile, Reconciler, Reconciliation};
pub use domain::value_objects::Lane;
pub use error::{PakstageError, PakstageResult};
