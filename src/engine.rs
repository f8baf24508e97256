//! Main AI engine: difficulty policy on top of the minimax search
//!
//! The engine maps a [`Difficulty`] to a search depth through its
//! [`EngineConfig`], runs the alpha-beta search with the configured
//! heuristic weights, and reports the chosen move with search statistics.
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color, Difficulty, SearchEngine};
//!
//! let engine = SearchEngine::new();
//! let board = Board::new();
//!
//! let result = engine.choose_move_with_stats(&board, Color::Black, Difficulty::Easy);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::board::{Board, Color, Pos};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::eval::HeuristicEvaluator;
use crate::search::{SearchStats, Searcher};

/// AI strength; each level maps to a search depth in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => f.write_str("easy"),
            Difficulty::Medium => f.write_str("medium"),
            Difficulty::Hard => f.write_str("hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` means the mover must pass
    pub best_move: Option<Pos>,
    /// Minimax value of the position for the mover
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Cutoff / pass / leaf counters
    pub stats: SearchStats,
}

/// Main AI engine for Othello.
///
/// Stateless between calls apart from its configuration, so a single engine
/// can serve both colors and any number of games.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    /// Engine with the default weights and depths (easy 1, medium 3, hard 5).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom configuration. Fails on out-of-range values.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search depth used for `difficulty`
    #[must_use]
    pub fn depth_for(&self, difficulty: Difficulty) -> u8 {
        self.config.depths.depth(difficulty)
    }

    /// Evaluator built from the configured weights
    #[must_use]
    pub fn evaluator(&self) -> HeuristicEvaluator {
        HeuristicEvaluator::new(self.config.weights)
    }

    /// Best move for `color`, or `None` if it has to pass.
    ///
    /// Deterministic for a given board, color, difficulty and configuration.
    #[must_use]
    pub fn choose_move(&self, board: &Board, color: Color, difficulty: Difficulty) -> Option<Pos> {
        self.choose_move_with_stats(board, color, difficulty).best_move
    }

    /// Best move with detailed search statistics.
    #[must_use]
    pub fn choose_move_with_stats(
        &self,
        board: &Board,
        color: Color,
        difficulty: Difficulty,
    ) -> MoveResult {
        let start = Instant::now();
        let depth = self.depth_for(difficulty);

        let mut searcher = Searcher::new(self.evaluator());
        let result = searcher.search(board, color, depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(pos) => log::debug!(
                "{color} ({difficulty}, depth {depth}) chose {pos}: score {:.2}, {} nodes, {} cutoffs, {time_ms}ms",
                result.score,
                result.nodes,
                result.stats.cutoffs
            ),
            None => log::debug!("{color} ({difficulty}) has no legal move"),
        }

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
            stats: result.stats,
        }
    }
}
