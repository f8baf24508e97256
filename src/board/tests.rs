use super::*;
use crate::rules::GameOutcome;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_color_parse() {
    assert_eq!("B".parse::<Color>().unwrap(), Color::Black);
    assert_eq!("w".parse::<Color>().unwrap(), Color::White);
    assert_eq!("White".parse::<Color>().unwrap(), Color::White);
    assert!(matches!(
        "R".parse::<Color>(),
        Err(crate::EngineError::InvalidColor(_))
    ));
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(Pos::try_new(8, 0).is_err());
    assert_eq!(Pos::try_new(2, 3).unwrap(), Pos::new(2, 3));
}

#[test]
fn test_pos_step() {
    assert_eq!(Pos::new(0, 0).step(-1, 0), None);
    assert_eq!(Pos::new(0, 0).step(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 7).step(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert!(CORNERS.iter().all(|c| c.is_corner()));
    assert!(!Pos::new(0, 1).is_corner());
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
    assert!(Pos::new(2, 3) < Pos::new(2, 4));
}

#[test]
fn test_bitboard_iter_row_major() {
    let bb: Bitboard = [Pos::new(7, 7), Pos::new(0, 3), Pos::new(4, 1)].into_iter().collect();
    let order: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(order, vec![Pos::new(0, 3), Pos::new(4, 1), Pos::new(7, 7)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::White);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Black);
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board.to_move(), Color::Black);
    assert!(!board.has_game_begun());
}

#[test]
fn test_opening_moves() {
    let board = Board::new();
    assert_eq!(
        board.valid_moves(Color::Black),
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );
    assert_eq!(
        board.valid_moves(Color::White),
        vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
    );
}

#[test]
fn test_apply_opening_move() {
    let mut board = Board::new();
    let flips = board.apply_move(Color::Black, Pos::new(2, 3)).unwrap();

    assert_eq!(flips.iter_ones().collect::<Vec<_>>(), vec![Pos::new(3, 3)]);
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Black);
    assert_eq!(board.score(Color::Black), (4, 1));
    assert_eq!(board.to_move(), Color::White);
    assert!(board.has_game_begun());
    assert_eq!(
        board.valid_moves(Color::White),
        vec![Pos::new(2, 2), Pos::new(2, 4), Pos::new(4, 2)]
    );
}

#[test]
fn test_invalid_move_leaves_board_unchanged() {
    let mut board = Board::new();
    let before = board;

    // Occupied cell
    let err = board.apply_move(Color::Black, Pos::new(3, 3)).unwrap_err();
    assert!(matches!(err, crate::EngineError::InvalidMove { .. }));
    // Empty cell that brackets nothing
    assert!(board.apply_move(Color::Black, Pos::new(0, 0)).is_err());
    // Adjacent but not bracketing
    assert!(board.apply_move(Color::Black, Pos::new(2, 2)).is_err());

    assert_eq!(board, before);
}

#[test]
fn test_off_board_move_is_rejected() {
    let mut board = Board::new();
    let before = board;

    for pos in [Pos { row: 8, col: 0 }, Pos { row: 3, col: 9 }, Pos { row: 255, col: 255 }] {
        assert!(!pos.is_on_board());
        assert!(!board.is_valid_move(Color::Black, pos));
        assert!(board.flips_for(Color::Black, pos).is_empty());
        assert!(matches!(
            board.apply_move(Color::Black, pos),
            Err(crate::EngineError::InvalidMove { color: Color::Black, .. })
        ));
    }
    assert_eq!(board, before);
    assert!(Pos::new(7, 7).is_on_board());
}

#[test]
fn test_multi_direction_flip() {
    let mut board: Board = "
        ........
        .W.W.W..
        ..BBB...
        .WB.BW..
        ..BBB...
        .W.W.W..
        ........
        ........
    "
    .parse()
    .unwrap();

    let flips = board.apply_move(Color::White, Pos::new(3, 3)).unwrap();
    assert_eq!(flips.count(), 8);
    assert_eq!(board.count(Color::Black), 0);
    assert_eq!(board.count(Color::White), 8 + 8 + 1);
}

#[test]
fn test_flip_stops_at_own_disc() {
    let mut board: Board = "
        BWWWB.WB
        ........
        ........
        ........
        ........
        ........
        ........
        ........
    "
    .parse()
    .unwrap();

    board.apply_move(Color::Black, Pos::new(0, 5)).unwrap();
    assert_eq!(board.to_string().lines().next(), Some("BWWWBBBB"));
}

#[test]
fn test_full_black_board_is_terminal() {
    let mut board = Board::empty(Color::Black);
    for pos in Pos::all() {
        board.place(pos, Color::Black);
    }
    assert!(board.is_terminal());
    assert_eq!(board.winner(), GameOutcome::BlackWins);
    assert!(board.valid_moves(Color::Black).is_empty());
    assert!(board.valid_moves(Color::White).is_empty());
}

#[test]
fn test_display_round_trip() {
    let mut board = Board::new();
    board.apply_move(Color::Black, Pos::new(2, 3)).unwrap();
    let parsed: Board = board.to_string().parse().unwrap();
    assert_eq!(parsed.with_to_move(Color::White), board);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!("BW".parse::<Board>().is_err());
    let bad_cell = "........\n".repeat(7) + "...Z....";
    assert!(bad_cell.parse::<Board>().is_err());
}

#[test]
fn test_pass_switches_turn() {
    let mut board = Board::new();
    board.pass();
    assert_eq!(board.to_move(), Color::White);
    assert_eq!(board.disc_count(), 4);
}
