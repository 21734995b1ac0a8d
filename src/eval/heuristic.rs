//! Heuristic evaluation function for Gomoku board positions
//!
//! Scores a board at a search leaf from a fixed player's point of view.
//! Every maximal run is scored exactly once per direction by scanning only
//! from run starts. The result depends on the stones alone, not on whose
//! turn it is.

use crate::board::{Board, Stone};
use crate::rules::{scan_run, DIRECTIONS};

use super::patterns::{pattern_score, PatternScore};

/// Largest magnitude a non-terminal position can score
const MAX_HEURISTIC: i32 = PatternScore::FIVE - 1;

/// Evaluate the board from the perspective of `agent`.
///
/// Returns:
/// - `PatternScore::FIVE` if the scan meets a winning run of `agent`
/// - `-PatternScore::FIVE` if it meets one of the opponent
/// - otherwise the agent's pattern total minus the opponent's, kept
///   strictly inside the win/loss scores
///
/// The first winning run found in row-major order decides a board where
/// both sides have one.
#[must_use]
pub fn evaluate(board: &Board, agent: Stone, win_length: usize) -> i32 {
    let mut agent_score = 0i32;
    let mut opponent_score = 0i32;

    for (pos, stone) in board.stones() {
        for &dir in &DIRECTIONS {
            let Some(run) = scan_run(board, pos, dir, stone) else {
                continue;
            };
            if run.length >= win_length {
                return if stone == agent {
                    PatternScore::FIVE
                } else {
                    -PatternScore::FIVE
                };
            }
            let score = pattern_score(run.length, run.open_ends);
            if stone == agent {
                agent_score = agent_score.saturating_add(score);
            } else {
                opponent_score = opponent_score.saturating_add(score);
            }
        }
    }

    agent_score
        .saturating_sub(opponent_score)
        .clamp(-MAX_HEURISTIC, MAX_HEURISTIC)
}

/// Pattern total for one color only.
///
/// Returns `PatternScore::FIVE` if that color already has a winning run.
#[must_use]
pub fn evaluate_side(board: &Board, stone: Stone, win_length: usize) -> i32 {
    let mut score = 0i32;
    for (pos, _) in board.stones().filter(|&(_, s)| s == stone) {
        for &dir in &DIRECTIONS {
            if let Some(run) = scan_run(board, pos, dir, stone) {
                if run.length >= win_length {
                    return PatternScore::FIVE;
                }
                score = score.saturating_add(pattern_score(run.length, run.open_ends));
            }
        }
    }
    score.min(MAX_HEURISTIC)
}
