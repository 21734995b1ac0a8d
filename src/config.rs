//! Game and search configuration
//!
//! The engine consumes three values from its environment (board size,
//! win-line length and the blank symbol) plus the symbols used for each
//! color. Search depth and the pruning flag belong to the engine itself.

use crate::board::Stone;
use crate::error::{EngineError, EngineResult};

/// Default board size (15x15, center at (7, 7))
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;

/// Default search depth in plies
pub const DEFAULT_DEPTH: i8 = 3;

/// Largest board a `Pos` can address
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// External cell symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub blank: char,
    pub black: char,
    pub white: char,
}

impl Symbols {
    /// Map an external symbol to a stone, `None` if outside the alphabet.
    #[inline]
    pub fn stone_for(&self, symbol: char) -> Option<Stone> {
        if symbol == self.blank {
            Some(Stone::Empty)
        } else if symbol == self.black {
            Some(Stone::Black)
        } else if symbol == self.white {
            Some(Stone::White)
        } else {
            None
        }
    }

    #[inline]
    pub fn symbol_for(&self, stone: Stone) -> char {
        match stone {
            Stone::Empty => self.blank,
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn is_distinct(&self) -> bool {
        self.blank != self.black && self.blank != self.white && self.black != self.white
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            blank: '.',
            black: 'X',
            white: 'O',
        }
    }
}

/// Board geometry and rules supplied by the surrounding game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub win_length: usize,
    pub symbols: Symbols,
}

impl GameConfig {
    #[must_use]
    pub fn new(board_size: usize, win_length: usize) -> Self {
        Self {
            board_size,
            win_length,
            symbols: Symbols::default(),
        }
    }

    #[must_use]
    pub fn with_symbols(mut self, symbols: Symbols) -> Self {
        self.symbols = symbols;
        self
    }

    /// Reject configurations that cannot describe a playable game.
    pub fn validate(&self) -> EngineResult<()> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "board size {} must be between 1 and {}",
                    self.board_size, MAX_BOARD_SIZE
                ),
            });
        }
        if self.win_length == 0 || self.win_length > self.board_size {
            return Err(EngineError::InvalidConfig {
                reason: format!(
                    "win length {} must be between 1 and the board size {}",
                    self.win_length, self.board_size
                ),
            });
        }
        if !self.symbols.is_distinct() {
            return Err(EngineError::InvalidConfig {
                reason: "blank, black and white symbols must differ".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH)
    }
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead, counting the agent's own move.
    ///
    /// Zero or less still tries every candidate and scores the board after
    /// it statically, so it plays exactly like depth 1.
    pub depth: i8,
    /// Use alpha-beta pruning instead of plain minimax
    pub pruning: bool,
    /// Evaluate root candidates on the rayon thread pool
    pub parallel: bool,
}

impl SearchConfig {
    /// Plain minimax at the given depth
    #[must_use]
    pub fn plain(depth: i8) -> Self {
        Self {
            depth,
            pruning: false,
            parallel: false,
        }
    }

    /// Alpha-beta minimax at the given depth
    #[must_use]
    pub fn alpha_beta(depth: i8) -> Self {
        Self {
            depth,
            pruning: true,
            parallel: false,
        }
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::alpha_beta(DEFAULT_DEPTH)
    }
}
