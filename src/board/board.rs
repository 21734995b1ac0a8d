//! Square board stored as a flat cell buffer

use std::fmt;

use super::{Pos, Stone};
use crate::config::{GameConfig, Symbols};
use crate::error::{EngineError, EngineResult};

/// Game board of `size * size` cells.
///
/// Cloning copies one flat buffer, which is what the search does for every
/// simulated move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Build a board from rows of external symbols.
    ///
    /// Fails on wrong dimensions or on any symbol outside the configured
    /// alphabet.
    pub fn from_grid<R: AsRef<[char]>>(rows: &[R], config: &GameConfig) -> EngineResult<Self> {
        config.validate()?;
        let size = config.board_size;
        if rows.len() != size {
            return Err(EngineError::DimensionMismatch {
                expected: size,
                found: rows.len(),
            });
        }

        let mut board = Self::new(size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(EngineError::RaggedRow {
                    row: r,
                    expected: size,
                    found: row.len(),
                });
            }
            for (c, &symbol) in row.iter().enumerate() {
                let stone = config
                    .symbols
                    .stone_for(symbol)
                    .ok_or(EngineError::UnknownSymbol { row: r, col: c, symbol })?;
                board.cells[r * size + c] = stone;
            }
        }
        Ok(board)
    }

    /// Parse a board from text: one row per non-blank line, whitespace
    /// between cells ignored.
    pub fn parse(text: &str, config: &GameConfig) -> EngineResult<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_grid(&rows, config)
    }

    /// Render back to rows of external symbols
    pub fn to_grid(&self, symbols: &Symbols) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|&s| symbols.symbol_for(s)).collect())
            .collect()
    }

    pub fn to_text(&self, symbols: &Symbols) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.to_grid(symbols) {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Position `(dr, dc)` away from `pos`, if it is on the board
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset(&self, pos: Pos, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(pos.row) + dr;
        let c = i32::from(pos.col) + dc;
        self.contains(r, c).then(|| Pos::new(r as u8, c as u8))
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone without any checks
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Place a stone on an empty cell
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> EngineResult<()> {
        if !self.is_empty(pos) {
            return Err(EngineError::OccupiedCell { pos });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Copy of this board with one extra stone
    #[inline]
    pub fn with_stone(&self, pos: Pos, stone: Stone) -> Self {
        let mut next = self.clone();
        next.place_stone(pos, stone);
        next
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Center cell `(N/2, N/2)`
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Occupied cells in (row, col) order
    #[allow(clippy::cast_possible_truncation)]
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != Stone::Empty)
            .map(move |(idx, &s)| (Pos::new((idx / size) as u8, (idx % size) as u8), s))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&Symbols::default()))
    }
}
