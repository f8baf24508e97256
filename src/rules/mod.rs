//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Move legality by bracketing along the eight ray directions
//! - Disc flipping
//! - Terminal detection and outcome

pub mod moves;
pub mod outcome;

// Re-exports for convenient access
pub use moves::{flips_for, has_any_move, legal_moves_mask, valid_moves, DIRECTIONS};
pub use outcome::{is_game_over, outcome, GameOutcome};
