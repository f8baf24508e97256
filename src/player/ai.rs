//! Computer player backed by the search engine

use crate::board::{Board, Color, Pos};
use crate::engine::{Difficulty, SearchEngine};
use crate::error::Result;

use super::{ensure_not_started, Controller};

/// AI-controlled player
#[derive(Debug, Clone)]
pub struct AiPlayer {
    color: Color,
    difficulty: Difficulty,
    engine: SearchEngine,
}

impl AiPlayer {
    /// Create an AI player for a game that has not started yet
    pub fn new(
        color: Color,
        board: &Board,
        difficulty: Difficulty,
        engine: SearchEngine,
    ) -> Result<Self> {
        ensure_not_started(board)?;
        Ok(Self {
            color,
            difficulty,
            engine,
        })
    }

    /// Like `new`, parsing the color (`"B"`/`"W"`) and the difficulty
    /// (`"easy"`/`"medium"`/`"hard"`, any case).
    pub fn from_names(
        color: &str,
        board: &Board,
        difficulty: &str,
        engine: SearchEngine,
    ) -> Result<Self> {
        Self::new(color.parse()?, board, difficulty.parse()?, engine)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

impl Controller for AiPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn request_move(&mut self, board: &Board) -> Result<Option<Pos>> {
        Ok(self.engine.choose_move(board, self.color, self.difficulty))
    }
}
