//! Common test utilities for pakstage CLI tests.
//!
//! - `TestEnv`: isolated working directory and config home, plus helpers to
//!   run the `pakstage` binary
//! - Fixtures: reusable package listings

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
