//! Human player fed with coordinates by the surrounding shell
//!
//! The shell keeps the [`MoveInput`] half and pushes the cell the user
//! picked; the player blocks on it while it is that player's turn. Illegal
//! picks are sent back on the input's rejection channel and the player keeps
//! waiting. Dropping the input (closing or restarting the game) ends the
//! wait with [`EngineError::InputClosed`].

use std::sync::mpsc::{channel, Receiver, Sender, TryIter};

use crate::board::{Board, Color, Pos};
use crate::error::{EngineError, Result};

use super::{ensure_not_started, Controller};

/// Human-controlled player
pub struct HumanPlayer {
    color: Color,
    moves: Receiver<Pos>,
    rejections: Sender<EngineError>,
}

/// Shell-side handle used to deliver a human's picks
pub struct MoveInput {
    moves: Sender<Pos>,
    rejections: Receiver<EngineError>,
}

impl HumanPlayer {
    /// Create a human player for a game that has not started yet, together
    /// with the input handle the shell uses to feed it.
    pub fn new(color: Color, board: &Board) -> Result<(Self, MoveInput)> {
        ensure_not_started(board)?;
        let (move_tx, move_rx) = channel();
        let (reject_tx, reject_rx) = channel();
        let player = Self {
            color,
            moves: move_rx,
            rejections: reject_tx,
        };
        let input = MoveInput {
            moves: move_tx,
            rejections: reject_rx,
        };
        Ok((player, input))
    }

    /// Like `new`, parsing the color (`"B"`/`"W"`, `"black"`/`"white"`).
    pub fn from_name(color: &str, board: &Board) -> Result<(Self, MoveInput)> {
        Self::new(color.parse()?, board)
    }
}

impl Controller for HumanPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn request_move(&mut self, board: &Board) -> Result<Option<Pos>> {
        if board.valid_moves(self.color).is_empty() {
            log::info!("{} has no legal move and passes", self.color);
            return Ok(None);
        }

        loop {
            let pos = self.moves.recv().map_err(|_| EngineError::InputClosed)?;
            let err = if !pos.is_on_board() {
                EngineError::OutOfBounds {
                    row: i32::from(pos.row),
                    col: i32::from(pos.col),
                }
            } else if board.is_valid_move(self.color, pos) {
                return Ok(Some(pos));
            } else {
                EngineError::InvalidMove {
                    pos,
                    color: self.color,
                }
            };
            log::warn!("rejected human input: {err}");
            if let Err(unsent) = self.rejections.send(err) {
                log::debug!("rejection not delivered: {}", unsent.0);
            }
        }
    }
}

impl MoveInput {
    /// Deliver a picked cell
    pub fn submit(&self, pos: Pos) -> Result<()> {
        self.moves.send(pos).map_err(|_| EngineError::InputClosed)
    }

    /// Deliver raw coordinates, checking they are on the board first
    pub fn submit_coords(&self, row: i32, col: i32) -> Result<()> {
        self.submit(Pos::try_new(row, col)?)
    }

    /// Next pending rejection, if any
    pub fn try_rejection(&self) -> Option<EngineError> {
        self.rejections.try_recv().ok()
    }

    /// All pending rejections
    pub fn rejections(&self) -> TryIter<'_, EngineError> {
        self.rejections.try_iter()
    }
}
