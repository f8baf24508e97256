//! Public API integration tests
//!
//! Drives the crate the way a front end would: set up a game, let players
//! take turns through a session, and check the rules hold throughout.

use std::thread;

use othello::board::TOTAL_CELLS;
use othello::{
    AiPlayer, Board, Color, Controller, Difficulty, EngineConfig, EngineError, GameOutcome,
    GameSession, HeuristicEvaluator, HumanPlayer, Pos, SearchEngine, Turn,
};

/// Opening: four center discs, the documented first moves, one flip
#[test]
fn test_opening_flow() {
    let mut board = Board::new();
    assert_eq!(board.score(Color::Black), (2, 2));
    assert_eq!(
        board.valid_moves(Color::Black),
        vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
    );

    let flipped = board.apply_move(Color::Black, Pos::new(2, 3)).unwrap();
    assert_eq!(flipped.count(), 1);
    assert_eq!(board.score(Color::Black), (4, 1));
    assert_eq!(board.valid_moves(Color::White).len(), 3);
    assert!(!board.is_terminal());

    let evaluator = HeuristicEvaluator::default();
    let black = evaluator.combined_score(&board, Color::Black);
    let white = evaluator.combined_score(&board, Color::White);
    assert!((black + white).abs() < 1e-9);
}

#[test]
fn test_full_board_is_terminal() {
    let rows = ["BBBBBBBB"; 8].join("\n");
    let board: Board = rows.parse().unwrap();
    assert_eq!(board.disc_count() as usize, TOTAL_CELLS);
    assert!(board.is_terminal());
    assert_eq!(board.winner(), GameOutcome::BlackWins);
    assert!(board.valid_moves(Color::Black).is_empty());
    assert!(board.valid_moves(Color::White).is_empty());

    let engine = SearchEngine::new();
    assert_eq!(engine.choose_move(&board, Color::White, Difficulty::Hard), None);
}

#[test]
fn test_choose_move_is_deterministic_across_engines() {
    let mut board = Board::new();
    board.apply_move(Color::Black, Pos::new(5, 4)).unwrap();
    board.apply_move(Color::White, Pos::new(5, 3)).unwrap();

    let first = SearchEngine::new().choose_move(&board, Color::Black, Difficulty::Medium);
    let second = SearchEngine::new().choose_move(&board, Color::Black, Difficulty::Medium);
    assert!(first.is_some());
    assert_eq!(first, second);
}

/// Whole AI vs AI game: discs never decrease and the game ends terminal
#[test]
fn test_ai_game_invariants() {
    let engine = SearchEngine::new();
    let start = Board::new();
    let mut black = AiPlayer::new(Color::Black, &start, Difficulty::Medium, engine.clone()).unwrap();
    let mut white = AiPlayer::new(Color::White, &start, Difficulty::Easy, engine).unwrap();

    let mut board = start;
    let mut last_count = board.disc_count();
    let mut turns = 0;
    while !board.is_terminal() {
        let player: &mut dyn Controller = match board.to_move() {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        match player.play_turn(&mut board).unwrap() {
            Turn::Played(_) => assert_eq!(board.disc_count(), last_count + 1),
            Turn::Passed => assert_eq!(board.disc_count(), last_count),
        }
        last_count = board.disc_count();
        turns += 1;
        assert!(turns < 200, "game did not terminate");
    }

    let (b, w) = board.score(Color::Black);
    let expected = match b.cmp(&w) {
        std::cmp::Ordering::Greater => GameOutcome::BlackWins,
        std::cmp::Ordering::Less => GameOutcome::WhiteWins,
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    };
    assert_eq!(board.winner(), expected);
}

/// Human (fed from another thread) against the AI through a session
#[test]
fn test_human_vs_ai_session() {
    let start = Board::new();
    let (human, input) = HumanPlayer::new(Color::Black, &start).unwrap();
    let ai = AiPlayer::new(Color::White, &start, Difficulty::Easy, SearchEngine::new()).unwrap();
    let mut session = GameSession::new(Box::new(human), Box::new(ai)).unwrap();

    let shell = thread::spawn(move || {
        // Illegal first, then a legal opening move
        input.submit(Pos::new(0, 0)).unwrap();
        input.submit(Pos::new(3, 2)).unwrap();
        input
    });

    assert_eq!(session.step().unwrap(), Some(Turn::Played(Pos::new(3, 2))));
    let input = shell.join().unwrap();
    assert!(matches!(
        input.try_rejection(),
        Some(EngineError::InvalidMove { color: Color::Black, .. })
    ));

    assert!(matches!(session.step().unwrap(), Some(Turn::Played(_))));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.board().disc_count(), 6);
    assert_eq!(session.to_move(), Color::Black);
}

#[test]
fn test_config_changes_search_depth() {
    let config = EngineConfig::from_toml_str(
        r#"
        [depths]
        easy = 2
        "#,
    )
    .unwrap();
    let engine = SearchEngine::with_config(config).unwrap();
    let result = engine.choose_move_with_stats(&Board::new(), Color::Black, Difficulty::Easy);
    assert_eq!(result.depth, 2);
    assert!(result.best_move.is_some());
}
