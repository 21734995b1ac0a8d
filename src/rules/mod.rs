//! Game rules for freestyle Gomoku
//!
//! This module implements:
//! - Line scanning shared by the win check and the evaluator
//! - Win conditions (N-in-a-row, overlines allowed)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{count_direction, is_run_start, scan_run, Direction, Run, DIRECTIONS};
pub use win::{find_winning_line, is_win, winner};
