//! Evaluation module for Gomoku positions
//!
//! Static scoring of leaf positions: line patterns (twos, threes, fours)
//! weighted by how many ends are still open.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_side};
pub use patterns::{pattern_score, PatternScore};
