//! Game session: turn order between two players
//!
//! The board itself does not police whose turn it is. The session owns the
//! board, asks the player whose color is to move for a turn, and records
//! what happened, including forced passes, until neither side can move.

use crate::board::{Board, Color};
use crate::error::{EngineError, Result};
use crate::player::{Controller, Turn};
use crate::rules::GameOutcome;

/// Boxed player usable from a session (possibly on another thread)
pub type BoxedController = Box<dyn Controller + Send>;

/// A game between two players, starting from the opening position
pub struct GameSession {
    board: Board,
    black: BoxedController,
    white: BoxedController,
    history: Vec<(Color, Turn)>,
}

impl GameSession {
    /// Start a game. Each player must play the color of its seat.
    pub fn new(black: BoxedController, white: BoxedController) -> Result<Self> {
        for (seat, player) in [(Color::Black, &black), (Color::White, &white)] {
            if player.color() != seat {
                return Err(EngineError::InvalidColor(format!(
                    "{} player seated as {seat}",
                    player.color()
                )));
            }
        }
        Ok(Self {
            board: Board::new(),
            black,
            white,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color whose turn it is
    pub fn to_move(&self) -> Color {
        self.board.to_move()
    }

    /// Every turn taken so far, in order
    pub fn history(&self) -> &[(Color, Turn)] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.winner()
    }

    /// Play one turn for the color to move. Returns `None` once the game is
    /// over. On error the board is left as it was.
    pub fn step(&mut self) -> Result<Option<Turn>> {
        if self.board.is_terminal() {
            return Ok(None);
        }

        let color = self.board.to_move();
        let player = match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        };
        let turn = player.play_turn(&mut self.board)?;
        log::info!("{color} {turn}");
        self.history.push((color, turn));

        if self.board.is_terminal() {
            let (black, white) = self.board.score(Color::Black);
            log::info!("game over: {} ({black}-{white})", self.board.winner());
        }
        Ok(Some(turn))
    }

    /// Play until neither side can move
    pub fn play_to_end(&mut self) -> Result<GameOutcome> {
        while self.step()?.is_some() {}
        Ok(self.outcome())
    }
}
