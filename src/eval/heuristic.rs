//! Heuristic evaluation function for Othello board positions
//!
//! This module provides the evaluation used at the leaves of the minimax
//! search. It combines four signals, each in [-100, 100] from the point of
//! view of the evaluated color:
//! - Coin parity (disc count difference)
//! - Mobility (legal move count difference)
//! - Corners captured (held corners plus currently playable corners)
//! - Stability (see [`super::stability`])
//!
//! Every signal is antisymmetric: `f(board, c) == -f(board, c.opponent())`.

use crate::board::{Bitboard, Board, Color, CORNERS};
use crate::config::HeuristicWeights;
use crate::rules::legal_moves_mask;

use super::stability::stability_with_moves;

/// `(own - opp) / (own + opp)`, or 0 when both are zero
#[inline]
fn ratio(own: u32, opp: u32) -> f64 {
    let total = own + opp;
    if total == 0 {
        return 0.0;
    }
    (f64::from(own) - f64::from(opp)) / f64::from(total)
}

#[inline]
fn corner_count(bb: Bitboard) -> u32 {
    CORNERS.iter().filter(|&&c| bb.get(c)).count() as u32
}

/// Disc count difference, scaled to [-100, 100]
#[must_use]
pub fn coin_parity(board: &Board, color: Color) -> f64 {
    let (own, opp) = board.score(color);
    100.0 * ratio(own, opp)
}

/// Legal move count difference, scaled to [-100, 100].
/// 0 when neither side can move.
#[must_use]
pub fn mobility(board: &Board, color: Color) -> f64 {
    let own = legal_moves_mask(board, color).count();
    let opp = legal_moves_mask(board, color.opponent()).count();
    100.0 * ratio(own, opp)
}

/// Corner control with the default 0.8 / 0.2 split between held and
/// playable corners.
#[must_use]
pub fn corners_captured(board: &Board, color: Color) -> f64 {
    corners_captured_with(board, color, HeuristicWeights::default().actual_corners)
}

/// Corner control, `actual_weight` being the share given to corners already
/// held (the rest goes to corners in either side's move list).
#[must_use]
pub fn corners_captured_with(board: &Board, color: Color, actual_weight: f64) -> f64 {
    let own_moves = legal_moves_mask(board, color);
    let opp_moves = legal_moves_mask(board, color.opponent());
    corner_score(board, color, own_moves, opp_moves, actual_weight)
}

fn corner_score(
    board: &Board,
    color: Color,
    own_moves: Bitboard,
    opp_moves: Bitboard,
    actual_weight: f64,
) -> f64 {
    let actual = ratio(
        corner_count(board.discs(color)),
        corner_count(board.discs(color.opponent())),
    );
    let potential = ratio(corner_count(own_moves), corner_count(opp_moves));
    100.0 * (actual_weight * actual + (1.0 - actual_weight) * potential)
}

/// Individual heuristic values plus their weighted total
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EvalBreakdown {
    pub coin_parity: f64,
    pub mobility: f64,
    pub stability: f64,
    pub corners: f64,
    pub total: f64,
}

/// Weighted combination of the four heuristics.
///
/// # Example
///
/// ```
/// use othello::{Board, Color, HeuristicEvaluator};
///
/// let evaluator = HeuristicEvaluator::default();
/// let board = Board::new();
/// // The opening is symmetric
/// assert_eq!(evaluator.combined_score(&board, Color::Black), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator {
    weights: HeuristicWeights,
}

impl HeuristicEvaluator {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Evaluate every heuristic for `color`, generating each side's legal
    /// moves once for mobility, stability and corners.
    #[must_use]
    pub fn breakdown(&self, board: &Board, color: Color) -> EvalBreakdown {
        let own_moves = legal_moves_mask(board, color);
        let opp_moves = legal_moves_mask(board, color.opponent());

        let coin_parity = coin_parity(board, color);
        let mobility = 100.0 * ratio(own_moves.count(), opp_moves.count());
        let stability = stability_with_moves(board, color, own_moves, opp_moves);
        let corners = corner_score(board, color, own_moves, opp_moves, self.weights.actual_corners);

        let w = &self.weights;
        let total = w.coin_parity * coin_parity
            + w.mobility * mobility
            + w.stability * stability
            + w.corners * corners;

        EvalBreakdown {
            coin_parity,
            mobility,
            stability,
            corners,
            total,
        }
    }

    /// Position score for `color`; positive favors `color`
    #[must_use]
    pub fn combined_score(&self, board: &Board, color: Color) -> f64 {
        self.breakdown(board, color).total
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn random_position(choices: &[usize]) -> Board {
        let mut board = Board::new();
        for &choice in choices {
            if board.is_terminal() {
                break;
            }
            let color = board.to_move();
            let moves = board.valid_moves(color);
            if moves.is_empty() {
                board.pass();
            } else {
                board
                    .apply_move(color, moves[choice % moves.len()])
                    .expect("generated move is legal");
            }
        }
        board
    }

    fn in_range(v: f64) -> bool {
        (-100.0..=100.0).contains(&v)
    }

    proptest! {
        #[test]
        fn prop_heuristics_bounded(choices in prop::collection::vec(0usize..64, 0..64)) {
            let board = random_position(&choices);
            let evaluator = HeuristicEvaluator::default();
            for color in [Color::Black, Color::White] {
                let b = evaluator.breakdown(&board, color);
                prop_assert!(in_range(b.coin_parity));
                prop_assert!(in_range(b.mobility));
                prop_assert!(in_range(b.corners));
                prop_assert!(in_range(b.stability));
                prop_assert!(in_range(b.total));
            }
        }

        #[test]
        fn prop_breakdown_antisymmetric(choices in prop::collection::vec(0usize..64, 0..64)) {
            let board = random_position(&choices);
            let evaluator = HeuristicEvaluator::default();
            let black = evaluator.breakdown(&board, Color::Black);
            let white = evaluator.breakdown(&board, Color::White);
            prop_assert!((black.total + white.total).abs() < 1e-9);
            prop_assert!((black.stability + white.stability).abs() < 1e-9);
        }

        #[test]
        fn prop_breakdown_stability_matches_standalone(
            choices in prop::collection::vec(0usize..64, 0..64)
        ) {
            let board = random_position(&choices);
            let evaluator = HeuristicEvaluator::default();
            for color in [Color::Black, Color::White] {
                let shared = evaluator.breakdown(&board, color).stability;
                let standalone = crate::eval::stability(&board, color);
                prop_assert!((shared - standalone).abs() < 1e-9);
            }
        }
    }
}
