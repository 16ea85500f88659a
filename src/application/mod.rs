//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BoardUseCase` - Load a package listing, reconcile it, report splits

pub mod board;

pub use board::{BoardResult, BoardUseCase};
