//! Agent facade over the search engine
//!
//! The agent owns the configuration and the side it plays for, checks every
//! board it is handed, and then either plays the center (empty board) or
//! runs the minimax search.
//!
//! # Example
//!
//! ```
//! use gomoku::{Agent, Board, GameConfig, Pos, SearchConfig, Stone};
//!
//! let mut agent = Agent::new(
//!     GameConfig::default(),
//!     SearchConfig::alpha_beta(2),
//!     Stone::White,
//!     Stone::Black,
//! )
//! .unwrap();
//!
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = agent.play_with_stats(&board).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Pos, Stone};
use crate::config::{GameConfig, SearchConfig};
use crate::error::{EngineError, EngineResult};
use crate::rules::is_win;
use crate::search::{SearchResult, Searcher};

/// How the returned move was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center played without search
    Opening,
    /// Chosen move completes a line
    ImmediateWin,
    /// Plain minimax result
    Minimax,
    /// Alpha-beta result
    AlphaBeta,
    /// No candidate move exists
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax value of the chosen move for the agent
    pub score: i32,
    /// How the move was chosen
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Gomoku-playing agent.
///
/// Plays one fixed color against one fixed opponent. The board passed to
/// [`Agent::play`] is only read; all simulated moves happen on copies.
#[derive(Debug, Clone)]
pub struct Agent {
    game: GameConfig,
    searcher: Searcher,
    stone: Stone,
    opponent: Stone,
    moves_played: u32,
}

impl Agent {
    /// Create an agent playing `stone` against `opponent`.
    pub fn new(
        game: GameConfig,
        search: SearchConfig,
        stone: Stone,
        opponent: Stone,
    ) -> EngineResult<Self> {
        game.validate()?;
        if stone == Stone::Empty || opponent == Stone::Empty || stone == opponent {
            return Err(EngineError::SameStone);
        }
        Ok(Self {
            searcher: Searcher::new(search, game.win_length),
            game,
            stone,
            opponent,
            moves_played: 0,
        })
    }

    /// Choose a move, or `None` if no candidate exists.
    pub fn play(&mut self, board: &Board) -> EngineResult<Option<Pos>> {
        Ok(self.play_with_stats(board)?.best_move)
    }

    /// Validate a raw symbol grid, then play on it.
    pub fn play_grid<R: AsRef<[char]>>(&mut self, rows: &[R]) -> EngineResult<Option<Pos>> {
        let board = Board::from_grid(rows, &self.game)?;
        self.play(&board)
    }

    /// Choose a move and report how it was found.
    #[instrument(skip_all, fields(stone = ?self.stone, depth = self.searcher.config().depth))]
    pub fn play_with_stats(&mut self, board: &Board) -> EngineResult<MoveResult> {
        self.check_board(board)?;
        let start = Instant::now();

        if board.is_board_empty() {
            let center = board.center();
            debug!(row = center.row, col = center.col, "empty board, playing center");
            self.moves_played += 1;
            return Ok(MoveResult::opening(center, elapsed_ms(start)));
        }

        let result = self.searcher.search(board, self.stone)?;
        let search_type = match result.best_move {
            None => SearchType::NoMove,
            Some(pos) if self.completes_line(board, pos) => SearchType::ImmediateWin,
            Some(_) if self.searcher.config().pruning => SearchType::AlphaBeta,
            Some(_) => SearchType::Minimax,
        };

        if result.best_move.is_some() {
            self.moves_played += 1;
        }
        debug!(
            search_type = ?search_type,
            score = result.score,
            nodes = result.stats.nodes,
            moves_played = self.moves_played,
            "move chosen"
        );

        Ok(MoveResult::from_search(result, search_type, elapsed_ms(start)))
    }

    fn completes_line(&self, board: &Board, pos: Pos) -> bool {
        let after = board.with_stone(pos, self.stone);
        is_win(&after, pos, self.stone, self.game.win_length)
    }

    fn check_board(&self, board: &Board) -> EngineResult<()> {
        if board.size() != self.game.board_size {
            return Err(EngineError::DimensionMismatch {
                expected: self.game.board_size,
                found: board.size(),
            });
        }
        Ok(())
    }

    /// Set the search depth in plies.
    pub fn set_depth(&mut self, depth: i8) {
        self.searcher.set_depth(depth);
    }

    /// Number of moves this agent has returned so far
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[must_use]
    pub fn stone(&self) -> Stone {
        self.stone
    }

    #[must_use]
    pub fn opponent(&self) -> Stone {
        self.opponent
    }

    #[must_use]
    pub fn game_config(&self) -> &GameConfig {
        &self.game
    }

    #[must_use]
    pub fn search_config(&self) -> &SearchConfig {
        self.searcher.config()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
