//! Error type shared by the whole engine

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Color, Pos};

/// Engine error type.
///
/// A player having no legal move is not an error: it shows up as `None`
/// from move selection and as `Turn::Passed` from a controller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The move is not among the mover's valid moves
    #[error("invalid move {pos} for {color}")]
    InvalidMove { pos: Pos, color: Color },

    /// Unknown color name
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Unknown difficulty name
    #[error("invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    /// A player was attached to a board that already had moves played
    #[error("cannot join a game that has already begun")]
    GameAlreadyBegun,

    /// Coordinates outside the 8x8 grid
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    /// The shell dropped the human move channel (game closed or restarted)
    #[error("move input closed")]
    InputClosed,

    /// Unparseable text board
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// Configuration values out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
