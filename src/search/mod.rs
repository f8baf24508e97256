//! Search module for the Othello AI
//!
//! Contains the depth-limited minimax search with alpha-beta pruning that
//! drives move selection.

pub mod minimax;

pub use minimax::{SearchResult, SearchStats, Searcher};
