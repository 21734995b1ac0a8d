//! Line scanning along the four board axes
//!
//! Shared by the win check and the evaluator. A line is walked in one
//! direction only; its opposite is covered by walking backwards from the
//! same cell.

use crate::board::{Board, Pos, Stone};

/// Axis direction as a (row, col) step
pub type Direction = (i32, i32);

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [Direction; 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// A maximal run of same-colored stones along one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub length: usize,
    /// Number of in-bounds empty cells directly before and after the run (0-2)
    pub open_ends: u8,
    /// Stones of the run, starting at the anchor
    pub positions: Vec<Pos>,
}

/// True if `pos` holds `stone` and the cell behind it along `dir` does not.
///
/// Only run starts are scanned, so every run is seen once per direction.
#[inline]
pub fn is_run_start(board: &Board, pos: Pos, dir: Direction, stone: Stone) -> bool {
    if board.get(pos) != stone {
        return false;
    }
    match board.offset(pos, -dir.0, -dir.1) {
        Some(prev) => board.get(prev) != stone,
        None => true,
    }
}

/// Count consecutive `stone` cells after `pos` along `dir`, not counting `pos`.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, dir: Direction, stone: Stone) -> usize {
    let mut count = 0;
    let mut cur = pos;
    while let Some(next) = board.offset(cur, dir.0, dir.1) {
        if board.get(next) != stone {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

/// Scan the run that starts at `anchor`.
///
/// Returns `None` unless `anchor` is a run start for `stone` (see
/// [`is_run_start`]). Out-of-bounds ends count as closed.
pub fn scan_run(board: &Board, anchor: Pos, dir: Direction, stone: Stone) -> Option<Run> {
    if !is_run_start(board, anchor, dir, stone) {
        return None;
    }

    let mut positions = vec![anchor];
    let mut cur = anchor;
    let mut after = None;
    while let Some(next) = board.offset(cur, dir.0, dir.1) {
        if board.get(next) != stone {
            after = Some(next);
            break;
        }
        positions.push(next);
        cur = next;
    }

    let before = board.offset(anchor, -dir.0, -dir.1);
    let open_ends = [before, after]
        .into_iter()
        .flatten()
        .filter(|&p| board.is_empty(p))
        .count() as u8;

    Some(Run {
        length: positions.len(),
        open_ends,
        positions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_start_detection() {
        let mut board = Board::new(15);
        for c in 3..6 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert!(is_run_start(&board, Pos::new(7, 3), (0, 1), Stone::Black));
        assert!(!is_run_start(&board, Pos::new(7, 4), (0, 1), Stone::Black));
        assert!(!is_run_start(&board, Pos::new(7, 5), (0, 1), Stone::Black));
        // Every stone starts its own vertical run
        assert!(is_run_start(&board, Pos::new(7, 4), (1, 0), Stone::Black));
        // Wrong color or empty cell never starts a run
        assert!(!is_run_start(&board, Pos::new(7, 3), (0, 1), Stone::White));
        assert!(!is_run_start(&board, Pos::new(0, 0), (0, 1), Stone::Black));
    }

    #[test]
    fn test_run_start_at_edge() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(0, 0), Stone::White);
        for &dir in &DIRECTIONS {
            assert!(is_run_start(&board, Pos::new(0, 0), dir, Stone::White));
        }
    }

    #[test]
    fn test_scan_open_three() {
        let mut board = Board::new(15);
        for c in 3..6 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        let run = scan_run(&board, Pos::new(7, 3), (0, 1), Stone::Black).unwrap();
        assert_eq!(run.length, 3);
        assert_eq!(run.open_ends, 2);
        assert_eq!(
            run.positions,
            vec![Pos::new(7, 3), Pos::new(7, 4), Pos::new(7, 5)]
        );
    }

    #[test]
    fn test_scan_from_interior_is_none() {
        let mut board = Board::new(15);
        for c in 3..6 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert!(scan_run(&board, Pos::new(7, 4), (0, 1), Stone::Black).is_none());
    }

    #[test]
    fn test_scan_blocked_by_opponent_and_edge() {
        let mut board = Board::new(15);
        board.place_stone(Pos::new(7, 0), Stone::Black);
        board.place_stone(Pos::new(7, 1), Stone::Black);
        board.place_stone(Pos::new(7, 2), Stone::White);
        let run = scan_run(&board, Pos::new(7, 0), (0, 1), Stone::Black).unwrap();
        assert_eq!(run.length, 2);
        assert_eq!(run.open_ends, 0);
    }

    #[test]
    fn test_scan_half_open_diagonal() {
        let mut board = Board::new(15);
        // SW diagonal from (2, 4) to (4, 2), blocked above-right by White
        board.place_stone(Pos::new(1, 5), Stone::White);
        for i in 0..3 {
            board.place_stone(Pos::new(2 + i, 4 - i), Stone::Black);
        }
        let run = scan_run(&board, Pos::new(2, 4), (1, -1), Stone::Black).unwrap();
        assert_eq!(run.length, 3);
        assert_eq!(run.open_ends, 1);
    }

    #[test]
    fn test_count_direction() {
        let mut board = Board::new(15);
        for r in 2..6 {
            board.place_stone(Pos::new(r, 9), Stone::White);
        }
        assert_eq!(count_direction(&board, Pos::new(2, 9), (1, 0), Stone::White), 3);
        assert_eq!(count_direction(&board, Pos::new(5, 9), (-1, 0), Stone::White), 3);
        assert_eq!(count_direction(&board, Pos::new(5, 9), (1, 0), Stone::White), 0);
        assert_eq!(count_direction(&board, Pos::new(14, 9), (1, 0), Stone::White), 0);
    }
}
