//! Players: a uniform "produce the next move" contract for humans and AIs
//!
//! A player never owns the board. It is handed the board of the game it
//! takes part in each turn, and can only join a game whose board is still in
//! the opening position.

pub mod ai;
pub mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, MoveInput};

use std::fmt;

use crate::board::{Board, Color, Pos};
use crate::error::{EngineError, Result};

/// What a player did with its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Played(Pos),
    /// Forced pass: the player had no legal move
    Passed,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Played(pos) => write!(f, "plays {pos}"),
            Turn::Passed => f.write_str("passes"),
        }
    }
}

/// Capability shared by every kind of player.
///
/// New strategies (scripted, remote, ...) only need `color` and
/// `request_move`; applying the move is provided.
pub trait Controller {
    /// Color this player plays
    fn color(&self) -> Color;

    /// Pick a legal move for `color()` on `board`, or `None` to pass.
    ///
    /// `None` is only returned when the player has no legal move.
    fn request_move(&mut self, board: &Board) -> Result<Option<Pos>>;

    /// Request a move and apply it to `board`, passing if there is none.
    fn play_turn(&mut self, board: &mut Board) -> Result<Turn> {
        let color = self.color();
        match self.request_move(board)? {
            Some(pos) => {
                board.apply_move(color, pos)?;
                Ok(Turn::Played(pos))
            }
            None => {
                board.pass();
                Ok(Turn::Passed)
            }
        }
    }
}

/// Players may only join a game before its first move
pub(crate) fn ensure_not_started(board: &Board) -> Result<()> {
    if board.has_game_begun() {
        return Err(EngineError::GameAlreadyBegun);
    }
    Ok(())
}
