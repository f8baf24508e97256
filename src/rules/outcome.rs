//! Terminal detection and game outcome

use std::fmt;

use crate::board::{Board, Color};

use super::moves::has_any_move;

/// Result of a game, derived from the board (never stored)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    /// Winning color, if the game ended decisively
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::BlackWins => Some(Color::Black),
            GameOutcome::WhiteWins => Some(Color::White),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => f.write_str("in progress"),
            GameOutcome::WhiteWins => f.write_str("White wins"),
            GameOutcome::BlackWins => f.write_str("Black wins"),
            GameOutcome::Draw => f.write_str("draw"),
        }
    }
}

/// Neither color can move. A full board always satisfies this.
pub fn is_game_over(board: &Board) -> bool {
    !has_any_move(board, Color::Black) && !has_any_move(board, Color::White)
}

/// Outcome by final disc counts; `InProgress` while anyone can still move
pub fn outcome(board: &Board) -> GameOutcome {
    if !is_game_over(board) {
        return GameOutcome::InProgress;
    }
    let (black, white) = board.score(Color::Black);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => GameOutcome::BlackWins,
        std::cmp::Ordering::Less => GameOutcome::WhiteWins,
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}
