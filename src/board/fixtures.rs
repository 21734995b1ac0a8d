//! Seeded board fixtures shared by the unit tests

use rand::rngs::StdRng;
use rand::Rng;

use super::{Board, Pos, Stone};
use crate::rules::is_win;

/// Random position with `stones` alternating stones and no finished line.
pub(crate) fn random_midgame(rng: &mut StdRng, size: usize, stones: usize) -> Board {
    loop {
        let mut board = Board::new(size);
        let mut stone = Stone::Black;
        let mut placed = 0;
        let mut tries = 0;
        while placed < stones && tries < 1_000 {
            tries += 1;
            let pos = Pos::new(rng.gen_range(0..size as u8), rng.gen_range(0..size as u8));
            if !board.is_empty(pos) {
                continue;
            }
            board.place_stone(pos, stone);
            if is_win(&board, pos, stone, 5) {
                board.remove_stone(pos);
                continue;
            }
            stone = stone.opponent();
            placed += 1;
        }
        if placed == stones {
            return board;
        }
    }
}
