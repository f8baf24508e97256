//! Othello (Reversi) decision engine
//!
//! Rules, position evaluation and move search for standard 8x8 Othello:
//! - Opening position with four center discs, Black moves first
//! - A move must bracket at least one opponent line; every bracketed disc flips
//! - A player with no legal move passes
//! - The game ends when neither player can move; most discs wins
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move legality, flipping and game end
//! - [`eval`]: Positional heuristics (coin parity, mobility, corners, stability)
//! - [`search`]: Depth-limited minimax with alpha-beta pruning
//! - [`engine`]: Difficulty policy on top of the search
//! - [`player`]: Human and AI players behind one [`Controller`] trait
//! - [`game`]: Turn order between two players
//! - [`config`]: Heuristic weights and difficulty depths, loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use othello::{Board, Color, Difficulty, Pos, SearchEngine};
//!
//! let mut board = Board::new();
//! let engine = SearchEngine::new();
//!
//! board.apply_move(Color::Black, Pos::new(2, 3)).unwrap();
//!
//! // AI responds as White
//! if let Some(pos) = engine.choose_move(&board, Color::White, Difficulty::Medium) {
//!     board.apply_move(Color::White, pos).unwrap();
//!     println!("AI plays at {pos}");
//! }
//! assert_eq!(board.disc_count(), 6);
//! ```
//!
//! # Evaluation
//!
//! Leaves are scored from the searching player's perspective as a weighted
//! sum of four heuristics, each in `[-100, 100]`:
//! 1. Coin parity: disc difference
//! 2. Mobility: legal move difference
//! 3. Corners: captured and reachable corners
//! 4. Stability: discs that can no longer be flipped
//!
//! # Logging
//!
//! The library reports through the [`log`] facade (search summaries at
//! `debug`, game events at `info`, rejected input at `warn`) and never
//! installs a logger itself.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod player;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, Cell, Color, Pos, BOARD_SIZE, CORNERS};
pub use config::{DifficultyDepths, EngineConfig, HeuristicWeights};
pub use engine::{Difficulty, MoveResult, SearchEngine};
pub use error::{EngineError, Result};
pub use eval::{EvalBreakdown, HeuristicEvaluator};
pub use game::GameSession;
pub use player::{AiPlayer, Controller, HumanPlayer, MoveInput, Turn};
pub use rules::GameOutcome;
