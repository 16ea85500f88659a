//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod lane;
pub mod schedule;

pub use lane::Lane;
pub use schedule::{scheduled_date_time, Timestamp, DEFAULT_DISPLAY_FORMAT};
