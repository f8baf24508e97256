//! Depth-limited minimax search with alpha-beta pruning
//!
//! The root mover maximizes [`HeuristicEvaluator::combined_score`] from its
//! own point of view and the opponent minimizes it on alternating plies.
//!
//! # Rules of the tree
//!
//! - A node is a leaf when the depth budget is used up or neither side can
//!   move; leaves are scored for the root mover.
//! - A side with no legal move passes: the same position is searched with
//!   the other side to move and no depth is consumed.
//! - Children are expanded in row-major order and a move only replaces the
//!   current best when it scores strictly higher, so ties go to the first
//!   move in that order.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::default();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Color, Pos};
use crate::eval::HeuristicEvaluator;
use crate::rules::{flips_for, valid_moves};

/// Bound wider than any reachable score
const INF: f64 = f64::INFINITY;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
    /// Forced passes expanded inside the tree
    pub passes: u64,
    /// Positions scored by the evaluator
    pub leaves: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the root mover must pass
    pub best_move: Option<Pos>,
    /// Minimax value of the root for the mover
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Minimax searcher.
///
/// Holds the evaluator and per-search counters; reusable across searches.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: HeuristicEvaluator,
    pruning: bool,
    nodes: u64,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(HeuristicEvaluator::default())
    }
}

impl Searcher {
    /// Alpha-beta searcher using `evaluator` at the leaves
    pub fn new(evaluator: HeuristicEvaluator) -> Self {
        Self {
            evaluator,
            pruning: true,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Toggle alpha-beta pruning. Plain minimax returns the same move and
    /// score, only slower.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn evaluator(&self) -> &HeuristicEvaluator {
        &self.evaluator
    }

    /// Search `depth` plies ahead for `color` and return the best move.
    ///
    /// With no legal move at the root the result carries `best_move: None`
    /// and the static score of the position.
    pub fn search(&mut self, board: &Board, color: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let depth = depth.max(1);
        let moves = valid_moves(board, color);
        if moves.is_empty() {
            let score = self.leaf(board, color);
            return self.result(None, score, depth);
        }

        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for mov in moves {
            let mut child = *board;
            child.apply_flips(color, mov, flips_for(board, mov, color));

            let score = self.minimax(&child, color.opponent(), depth - 1, alpha, INF, color);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(mov);
            }
            if self.pruning {
                alpha = alpha.max(score);
            }
        }

        self.result(best_move, best_score, depth)
    }

    fn result(&self, best_move: Option<Pos>, score: f64, depth: u8) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board, root: Color) -> f64 {
        self.stats.leaves += 1;
        self.evaluator.combined_score(board, root)
    }

    /// Value of `board` with `to_move` on move, from `root`'s point of view.
    fn minimax(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        root: Color,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf(board, root);
        }

        let moves = valid_moves(board, to_move);
        if moves.is_empty() {
            if valid_moves(board, to_move.opponent()).is_empty() {
                return self.leaf(board, root);
            }
            // Forced pass: same position, other side, same depth
            self.stats.passes += 1;
            return self.minimax(board, to_move.opponent(), depth, alpha, beta, root);
        }

        let maximizing = to_move == root;
        let mut best = if maximizing { -INF } else { INF };

        for mov in moves {
            let mut child = *board;
            child.apply_flips(to_move, mov, flips_for(board, mov, to_move));

            let score = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta, root);

            if maximizing {
                best = best.max(score);
                if self.pruning {
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(score);
                if self.pruning {
                    beta = beta.min(best);
                }
            }

            if self.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
