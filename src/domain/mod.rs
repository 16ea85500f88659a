//! Domain Layer
//!
//! Pure staging-board logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - PackageRecord, PakNode, Board, Diagnostic
//! - `value_objects/` - Lane, staging-window timestamps
//! - `services/` - Reconciler, cross-lane split report
//! - `ports/` - RecordSource and event sink interfaces

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
