//! Game rules for standard Gomoku
//!
//! Free-style rules: no captures, no forbidden moves, five or more in a row
//! wins.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, count_consecutive, DIRECTIONS};
