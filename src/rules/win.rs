//! Win condition checking
//!
//! A player wins by placing `win_length` or more stones in an unbroken
//! line along any of the four axes. Overlines count.

use crate::board::{Board, Pos, Stone};

use super::line::{count_direction, scan_run, DIRECTIONS};

/// Check whether the stone just placed at `last_move` completes a line.
///
/// `board` must already hold `stone` at `last_move`. Only the four lines
/// through that cell are examined.
#[inline]
pub fn is_win(board: &Board, last_move: Pos, stone: Stone, win_length: usize) -> bool {
    if stone == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = count_direction(board, last_move, (dr, dc), stone);
        let backward = count_direction(board, last_move, (-dr, -dc), stone);
        forward + backward + 1 >= win_length
    })
}

/// Find the stones of a winning line for `stone`, if one exists anywhere.
pub fn find_winning_line(board: &Board, stone: Stone, win_length: usize) -> Option<Vec<Pos>> {
    if stone == Stone::Empty {
        return None;
    }
    board
        .stones()
        .filter(|&(_, s)| s == stone)
        .flat_map(|(pos, _)| DIRECTIONS.iter().map(move |&dir| (pos, dir)))
        .filter_map(|(pos, dir)| scan_run(board, pos, dir, stone))
        .find(|run| run.length >= win_length)
        .map(|run| run.positions)
}

/// Check for a winner on the whole board.
///
/// Returns the first color found with a winning line, Black checked first.
pub fn winner(board: &Board, win_length: usize) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| find_winning_line(board, stone, win_length).is_some())
}
