//! Error types for the Gomoku engine
//!
//! The search itself cannot fail. Everything here is raised while checking
//! configuration and input boards, before any search begins.

use thiserror::Error;

use crate::board::Pos;

/// Errors that can occur when configuring the engine or feeding it a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Configuration values that cannot describe a playable game
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Board has the wrong number of rows
    #[error("Board has {found} rows, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A row has the wrong number of cells
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds a symbol outside the blank/black/white alphabet
    #[error("Unknown symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },

    /// Agent and opponent were given the same stone (or an empty one)
    #[error("Agent and opponent must be distinct, non-empty stones")]
    SameStone,

    /// Attempted to place a stone on an occupied cell
    #[error("Cell ({}, {}) is already occupied", .pos.row, .pos.col)]
    OccupiedCell { pos: Pos },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
