//! Depth-limited minimax with optional alpha-beta pruning
//!
//! One searcher covers both variants; `SearchConfig::pruning` switches the
//! alpha-beta cutoffs on. Pruning only skips branches that cannot change the
//! result, so both variants choose the same move for the same board and depth.
//!
//! Every simulated move is played on a fresh copy of the parent board. The
//! caller's board is never touched, and sibling branches never see each
//! other's stones.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::config::SearchConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let searcher = Searcher::new(SearchConfig::alpha_beta(2), 5);
//! let result = searcher.search(&board, Stone::White).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::{Board, Pos, Stone};
use crate::config::{SearchConfig, MAX_BOARD_SIZE};
use crate::error::{EngineError, EngineResult};
use crate::eval::{evaluate, PatternScore};
use crate::rules::is_win;

use super::movegen::generate_moves;

/// Score of a completed line
pub const WIN_SCORE: i32 = PatternScore::FIVE;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = WIN_SCORE + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the static evaluator
    pub leaves: u64,
    /// Nodes whose remaining candidates were skipped by pruning
    pub cutoffs: u64,
    /// Simulated moves that completed a line
    pub immediate_wins: u64,
}

impl SearchStats {
    /// Share of interior nodes that were cut off, in percent
    pub fn cutoff_rate(&self) -> f64 {
        let interior = self.nodes.saturating_sub(self.leaves);
        if interior == 0 {
            0.0
        } else {
            self.cutoffs as f64 / interior as f64 * 100.0
        }
    }

    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.immediate_wins += other.immediate_wins;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when there is no candidate
    pub best_move: Option<Pos>,
    /// Minimax value of the best move, from the agent's point of view
    pub score: i32,
    /// Depth the search was run at
    pub depth: i8,
    pub stats: SearchStats,
}

/// Minimax searcher, plain or alpha-beta depending on its configuration.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    win_length: usize,
}

impl Searcher {
    #[must_use]
    pub fn new(config: SearchConfig, win_length: usize) -> Self {
        Self { config, win_length }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: i8) {
        self.config.depth = depth;
    }

    /// Choose the best move for `agent` on `board`.
    ///
    /// The first candidate in generator order that completes a line is
    /// played without searching, so a forced win found deeper in the tree
    /// never displaces an immediate one. Otherwise every candidate is scored
    /// by searching the opponent's replies and ties keep the first one.
    ///
    /// Fails on a board with no cells or with more rows than a `Pos` can
    /// address.
    pub fn search(&self, board: &Board, agent: Stone) -> EngineResult<SearchResult> {
        let size = board.size();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(EngineError::InvalidConfig {
                reason: format!("board size {} must be between 1 and {}", size, MAX_BOARD_SIZE),
            });
        }

        let depth = self.config.depth;
        let moves = generate_moves(board);

        let mut worker = Worker::new(self, agent);
        worker.stats.nodes += 1;

        if moves.is_empty() {
            worker.stats.leaves += 1;
            let score = evaluate(board, agent, self.win_length);
            debug!(score, "no candidate moves");
            return Ok(SearchResult {
                best_move: None,
                score,
                depth,
                stats: worker.stats,
            });
        }

        if let Some(mov) = worker.immediate_win(board, &moves) {
            debug!(row = mov.row, col = mov.col, "completing a line");
            return Ok(SearchResult {
                best_move: Some(mov),
                score: WIN_SCORE,
                depth,
                stats: worker.stats,
            });
        }

        let (best_move, score) = if self.config.parallel {
            self.search_root_parallel(board, agent, &moves, &mut worker.stats)
        } else {
            worker.search_root(board, &moves)
        };

        debug!(
            best_move = ?best_move,
            score,
            depth,
            pruning = self.config.pruning,
            nodes = worker.stats.nodes,
            cutoffs = worker.stats.cutoffs,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: worker.stats,
        })
    }

    /// Root candidates searched independently on the rayon pool.
    ///
    /// Each subtree gets the full window, so values are exact and the merge
    /// in generator order picks the same move as the sequential search.
    fn search_root_parallel(
        &self,
        board: &Board,
        agent: Stone,
        moves: &[Pos],
        stats: &mut SearchStats,
    ) -> (Option<Pos>, i32) {
        let scored: Vec<(Pos, i32, SearchStats)> = moves
            .par_iter()
            .map(|&mov| {
                let mut worker = Worker::new(self, agent);
                let value = worker.root_value(board, mov, -INF, INF);
                (mov, value, worker.stats)
            })
            .collect();

        let mut best_move = None;
        let mut best_score = -INF;
        for (mov, value, child_stats) in &scored {
            stats.merge(child_stats);
            trace!(row = mov.row, col = mov.col, value, "root candidate");
            if *value > best_score {
                best_score = *value;
                best_move = Some(*mov);
            }
        }
        (best_move, best_score)
    }
}

/// Per-search state: the side being played for and running statistics.
struct Worker<'a> {
    searcher: &'a Searcher,
    agent: Stone,
    opponent: Stone,
    stats: SearchStats,
}

impl<'a> Worker<'a> {
    fn new(searcher: &'a Searcher, agent: Stone) -> Self {
        Self {
            searcher,
            agent,
            opponent: agent.opponent(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn pruning(&self) -> bool {
        self.searcher.config.pruning
    }

    /// First candidate that completes a line for the agent
    fn immediate_win(&mut self, board: &Board, moves: &[Pos]) -> Option<Pos> {
        let win = moves.iter().copied().find(|&mov| {
            let child = board.with_stone(mov, self.agent);
            is_win(&child, mov, self.agent, self.searcher.win_length)
        });
        if win.is_some() {
            self.stats.immediate_wins += 1;
        }
        win
    }

    fn search_root(&mut self, board: &Board, moves: &[Pos]) -> (Option<Pos>, i32) {
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &mov in moves {
            let value = self.root_value(board, mov, alpha, beta);
            trace!(row = mov.row, col = mov.col, value, "root candidate");

            if value > best_score {
                best_score = value;
                best_move = Some(mov);
            }

            if self.pruning() {
                alpha = alpha.max(best_score);
                if best_score >= beta || best_score == WIN_SCORE {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        (best_move, best_score)
    }

    /// Value of the agent playing `mov` at the root.
    fn root_value(&mut self, board: &Board, mov: Pos, alpha: i32, beta: i32) -> i32 {
        let child = board.with_stone(mov, self.agent);
        if is_win(&child, mov, self.agent, self.searcher.win_length) {
            self.stats.immediate_wins += 1;
            WIN_SCORE
        } else {
            self.minimax(&child, self.searcher.config.depth.saturating_sub(1), false, alpha, beta)
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// `maximizing` is true when the agent is to move. `alpha` and `beta`
    /// are ignored unless pruning is enabled.
    fn minimax(
        &mut self,
        board: &Board,
        depth: i8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        let win_length = self.searcher.win_length;

        if depth <= 0 {
            self.stats.leaves += 1;
            return evaluate(board, self.agent, win_length);
        }

        let moves = generate_moves(board);
        if moves.is_empty() {
            self.stats.leaves += 1;
            return evaluate(board, self.agent, win_length);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                let child = board.with_stone(mov, self.agent);
                let value = if is_win(&child, mov, self.agent, win_length) {
                    self.stats.immediate_wins += 1;
                    WIN_SCORE
                } else {
                    self.minimax(&child, depth - 1, false, alpha, beta)
                };
                best = best.max(value);

                if self.pruning() {
                    alpha = alpha.max(best);
                    if best >= beta || best == WIN_SCORE {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                let child = board.with_stone(mov, self.opponent);
                let value = if is_win(&child, mov, self.opponent, win_length) {
                    self.stats.immediate_wins += 1;
                    -WIN_SCORE
                } else {
                    self.minimax(&child, depth - 1, true, alpha, beta)
                };
                best = best.min(value);

                if self.pruning() {
                    beta = beta.min(best);
                    if best <= alpha || best == -WIN_SCORE {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
            }
            best
        }
    }
}
