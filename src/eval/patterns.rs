//! Pattern scores for Gomoku evaluation
//!
//! A run is scored from its length and the number of open ends. Runs
//! shorter than two, and runs with both ends blocked, are worth nothing.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Completed line - win or loss
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 100_000;
    /// Half-open four: XOOOO_ or _OOOOX
    pub const HALF_OPEN_FOUR: i32 = 10_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 1_000;
    /// Half-open three: XOOO_ or _OOOX
    pub const HALF_OPEN_THREE: i32 = 500;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 100;
    /// Half-open two: XOO_ or _OOX
    pub const HALF_OPEN_TWO: i32 = 50;
}

/// Score of a single run below the winning length.
#[inline]
pub fn pattern_score(length: usize, open_ends: u8) -> i32 {
    match (length, open_ends) {
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::HALF_OPEN_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::HALF_OPEN_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::HALF_OPEN_TWO,
        _ => 0,
    }
}
