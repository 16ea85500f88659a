//! Board use case
//!
//! Loads a package listing, reconciles it, and reports what happened.

mod result;
mod use_case;


pub use result::BoardResult;
pub use use_case::BoardUseCase;
