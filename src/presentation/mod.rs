//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use pakstage::presentation::factory;
//!
//! let use_case = factory::create_board_use_case(Path::new("paks.json"), &config);
//! let result = use_case.execute()?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_board_use_case;
