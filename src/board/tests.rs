use super::*;
use crate::config::GameConfig;
use crate::error::EngineError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_distance() {
    assert_eq!(Pos::new(7, 7).distance(Pos::new(7, 7)), 0);
    assert_eq!(Pos::new(7, 7).distance(Pos::new(9, 8)), 2);
    assert_eq!(Pos::new(0, 14).distance(Pos::new(14, 0)), 14);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(15);
    assert_eq!(board.size(), 15);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board.center(), Pos::new(7, 7));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new(15);
    board.place_stone(Pos::new(3, 4), Stone::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Stone::Black);
    assert!(!board.is_empty(Pos::new(3, 4)));
    assert_eq!(board.stone_count(), 1);

    board.remove_stone(Pos::new(3, 4));
    assert!(board.is_board_empty());
}

#[test]
fn test_try_place_occupied() {
    let mut board = Board::new(9);
    board.try_place(Pos::new(4, 4), Stone::White).unwrap();
    assert_eq!(
        board.try_place(Pos::new(4, 4), Stone::Black),
        Err(EngineError::OccupiedCell { pos: Pos::new(4, 4) })
    );
    assert_eq!(board.get(Pos::new(4, 4)), Stone::White);
}

#[test]
fn test_with_stone_leaves_original() {
    let board = Board::new(9);
    let next = board.with_stone(Pos::new(0, 0), Stone::Black);
    assert!(board.is_board_empty());
    assert_eq!(next.get(Pos::new(0, 0)), Stone::Black);
}

#[test]
fn test_offset_clips_to_bounds() {
    let board = Board::new(15);
    assert_eq!(board.offset(Pos::new(0, 0), -1, 0), None);
    assert_eq!(board.offset(Pos::new(0, 0), 1, 1), Some(Pos::new(1, 1)));
    assert_eq!(board.offset(Pos::new(14, 14), 0, 1), None);
    assert_eq!(board.offset(Pos::new(5, 0), 1, -1), None);
}

#[test]
fn test_stones_in_row_major_order() {
    let mut board = Board::new(5);
    board.place_stone(Pos::new(4, 0), Stone::White);
    board.place_stone(Pos::new(0, 3), Stone::Black);
    board.place_stone(Pos::new(2, 2), Stone::Black);

    let stones: Vec<_> = board.stones().collect();
    assert_eq!(
        stones,
        vec![
            (Pos::new(0, 3), Stone::Black),
            (Pos::new(2, 2), Stone::Black),
            (Pos::new(4, 0), Stone::White),
        ]
    );
}

#[test]
fn test_full_board() {
    let mut board = Board::new(3);
    for r in 0..3 {
        for c in 0..3 {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_parse_and_render() {
    let config = GameConfig::new(5, 4);
    let text = "\
        . . . . .
        . X O . .
        . . X . .
        . . . . .
        O . . . .
    ";
    let board = Board::parse(text, &config).unwrap();
    assert_eq!(board.get(Pos::new(1, 1)), Stone::Black);
    assert_eq!(board.get(Pos::new(1, 2)), Stone::White);
    assert_eq!(board.get(Pos::new(2, 2)), Stone::Black);
    assert_eq!(board.get(Pos::new(4, 0)), Stone::White);
    assert_eq!(board.stone_count(), 4);

    let rendered = board.to_text(&config.symbols);
    assert_eq!(rendered, ".....\n.XO..\n..X..\n.....\nO....\n");
    assert_eq!(Board::parse(&rendered, &config).unwrap(), board);
}

#[test]
fn test_parse_wrong_row_count() {
    let config = GameConfig::new(5, 4);
    let err = Board::parse(".....\n.....\n", &config).unwrap_err();
    assert_eq!(err, EngineError::DimensionMismatch { expected: 5, found: 2 });
}

#[test]
fn test_parse_ragged_row() {
    let config = GameConfig::new(3, 3);
    let err = Board::parse("...\n..\n...\n", &config).unwrap_err();
    assert_eq!(
        err,
        EngineError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn test_parse_unknown_symbol() {
    let config = GameConfig::new(3, 3);
    let err = Board::parse("...\n.Z.\n...\n", &config).unwrap_err();
    assert_eq!(
        err,
        EngineError::UnknownSymbol {
            row: 1,
            col: 1,
            symbol: 'Z'
        }
    );
}

#[test]
fn test_from_grid_rejects_invalid_config() {
    let config = GameConfig::new(3, 5);
    let rows = vec![vec!['.'; 3]; 3];
    assert!(matches!(
        Board::from_grid(&rows, &config),
        Err(EngineError::InvalidConfig { .. })
    ));
}
