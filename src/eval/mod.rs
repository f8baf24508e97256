//! Position evaluation for the search
//!
//! Contains:
//! - The four positional heuristics and their weighted combination
//! - Disc stability classification

pub mod heuristic;
pub mod stability;

pub use heuristic::{
    coin_parity, corners_captured, corners_captured_with, mobility, EvalBreakdown,
    HeuristicEvaluator,
};
pub use stability::{disc_stability, stability, DiscStability, StabilityClass};
