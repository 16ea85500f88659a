//! Domain Entities
//!
//! - `PackageRecord` - a flat row from the package listing
//! - `PakNode` - a record placed on the board
//! - `Board` - the three lane forests
//! - `Diagnostic` - a record that could not be placed

mod board;
mod diagnostic;
mod node;
mod record;

pub use board::{Board, LaneForest};
pub use diagnostic::Diagnostic;
pub use node::PakNode;
pub use record::PackageRecord;
