//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation around existing stones
//! - Depth-limited minimax, plain or with alpha-beta pruning

pub mod minimax;
pub mod movegen;

pub use minimax::{SearchResult, SearchStats, Searcher, INF, WIN_SCORE};
pub use movegen::generate_moves;
