//! Candidate move generation
//!
//! Only empty cells within a 5x5 window around an existing stone are
//! considered, which keeps the branching factor manageable on large boards.

use crate::board::{Board, Pos};

/// Chebyshev radius of the window around each stone
const RADIUS: i32 = 2;

/// Generate candidate moves near existing stones.
///
/// The result is sorted by (row, col) so search tie-breaks are reproducible.
/// An empty board yields only the center cell.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut moves = Vec::with_capacity(64);

    for (pos, _) in board.stones() {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                let Some(new_pos) = board.offset(pos, dr, dc) else {
                    continue;
                };
                let idx = new_pos.row as usize * size + new_pos.col as usize;
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                if board.is_empty(new_pos) {
                    moves.push(new_pos);
                }
            }
        }
    }

    moves.sort_unstable();
    moves
}
