pub mod board;
pub mod check;
