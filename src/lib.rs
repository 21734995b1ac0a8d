//! Gomoku minimax engine
//!
//! A decision engine for five-in-a-row on a square board:
//! - Configurable board size and win-line length (default 15x15, five to win)
//! - Candidate moves restricted to cells near existing stones
//! - Static pattern evaluation (open/half-open twos, threes and fours)
//! - Depth-limited minimax, plain or with alpha-beta pruning
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation as a flat cell buffer
//! - [`rules`]: Line scanning and win detection
//! - [`eval`]: Position evaluation
//! - [`search`]: Move generation and minimax search
//! - [`engine`]: The [`Agent`] facade exposing `play`
//! - [`config`] and [`error`]: Configuration and input validation
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Agent, Board, GameConfig, Pos, SearchConfig, Stone};
//!
//! let mut agent = Agent::new(
//!     GameConfig::default(),
//!     SearchConfig::alpha_beta(2),
//!     Stone::Black,
//!     Stone::White,
//! )
//! .unwrap();
//!
//! let mut board = Board::new(15);
//! // First move always goes to the center
//! assert_eq!(agent.play(&board).unwrap(), Some(Pos::new(7, 7)));
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! board.place_stone(Pos::new(7, 8), Stone::White);
//! if let Some(pos) = agent.play(&board).unwrap() {
//!     board.place_stone(pos, Stone::Black);
//!     println!("Agent plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Empty board: play the center without searching
//! 2. A candidate that completes a line wins outright
//! 3. Otherwise the highest minimax value, first candidate on ties

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone};
pub use config::{GameConfig, SearchConfig, Symbols};
pub use engine::{Agent, MoveResult, SearchType};
pub use error::{EngineError, EngineResult};
