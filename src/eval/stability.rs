//! Disc stability classification
//!
//! - **Stable**: can never be flipped again. Along each of the four axes the
//!   disc is either on a completely filled line or touches the edge or a
//!   stable disc of its own color on at least one side. Corners seed the
//!   fixpoint and stability spreads along edges and filled lines from there.
//! - **Unstable**: flipped by at least one legal opponent move right now.
//! - **Semi-stable**: everything else.

use crate::board::{Bitboard, Board, Color, Pos};
use crate::rules::{flips_for, legal_moves_mask};

/// Axes a disc can be flipped along (each covers both directions)
const AXES: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stability class of a single disc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityClass {
    Stable,
    SemiStable,
    Unstable,
}

/// Partition of one color's discs by stability class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscStability {
    pub stable: Bitboard,
    pub semi_stable: Bitboard,
    pub unstable: Bitboard,
}

impl DiscStability {
    pub fn class_of(&self, pos: Pos) -> Option<StabilityClass> {
        if self.stable.get(pos) {
            Some(StabilityClass::Stable)
        } else if self.unstable.get(pos) {
            Some(StabilityClass::Unstable)
        } else if self.semi_stable.get(pos) {
            Some(StabilityClass::SemiStable)
        } else {
            None
        }
    }

    /// `stable - unstable`; semi-stable discs count zero
    #[inline]
    pub fn net(&self) -> f64 {
        f64::from(self.stable.count()) - f64::from(self.unstable.count())
    }

    #[inline]
    fn decided(&self) -> f64 {
        f64::from(self.stable.count() + self.unstable.count())
    }
}

/// Every cell on the line through `pos` along `(dr, dc)` is occupied
fn line_is_full(occupied: Bitboard, pos: Pos, dr: i32, dc: i32) -> bool {
    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        let mut cur = pos.step(sr, sc);
        while let Some(p) = cur {
            if !occupied.get(p) {
                return false;
            }
            cur = p.step(sr, sc);
        }
    }
    true
}

/// Neighbour along `(dr, dc)` is off the board or already known stable
#[inline]
fn anchored(stable: Bitboard, pos: Pos, dr: i32, dc: i32) -> bool {
    pos.step(dr, dc).map_or(true, |p| stable.get(p))
}

/// Discs of `color` that can never be flipped
pub fn stable_discs(board: &Board, color: Color) -> Bitboard {
    let own = board.discs(color);
    let occupied = board.occupied();
    let mut stable = Bitboard::new();

    loop {
        let mut changed = false;
        for pos in (own & !stable).iter_ones() {
            let locked = AXES.iter().all(|&(dr, dc)| {
                anchored(stable, pos, dr, dc)
                    || anchored(stable, pos, -dr, -dc)
                    || line_is_full(occupied, pos, dr, dc)
            });
            if locked {
                stable.set(pos);
                changed = true;
            }
        }
        if !changed {
            return stable;
        }
    }
}

/// Discs of `color` the opponent can flip with its next move
pub fn unstable_discs(board: &Board, color: Color) -> Bitboard {
    threatened_discs(board, color, legal_moves_mask(board, color.opponent()))
}

/// Discs of `color` flipped by at least one of `opp_moves`
fn threatened_discs(board: &Board, color: Color, opp_moves: Bitboard) -> Bitboard {
    let opponent = color.opponent();
    let mut threatened = Bitboard::new();
    for pos in opp_moves.iter_ones() {
        threatened |= flips_for(board, pos, opponent);
    }
    threatened & board.discs(color)
}

/// Classify all discs of `color`
pub fn disc_stability(board: &Board, color: Color) -> DiscStability {
    classify(board, color, legal_moves_mask(board, color.opponent()))
}

fn classify(board: &Board, color: Color, opp_moves: Bitboard) -> DiscStability {
    let own = board.discs(color);
    let stable = stable_discs(board, color);
    let unstable = threatened_discs(board, color, opp_moves) & !stable;
    DiscStability {
        stable,
        semi_stable: own & !stable & !unstable,
        unstable,
    }
}

/// Stability heuristic in [-100, 100] from `color`'s point of view.
///
/// 0 when no disc of either color is stable or unstable.
pub fn stability(board: &Board, color: Color) -> f64 {
    let own_moves = legal_moves_mask(board, color);
    let opp_moves = legal_moves_mask(board, color.opponent());
    stability_with_moves(board, color, own_moves, opp_moves)
}

/// `stability` with both sides' legal moves already generated
pub(crate) fn stability_with_moves(
    board: &Board,
    color: Color,
    own_moves: Bitboard,
    opp_moves: Bitboard,
) -> f64 {
    let own = classify(board, color, opp_moves);
    let opp = classify(board, color.opponent(), own_moves);
    let decided = own.decided() + opp.decided();
    if decided == 0.0 {
        return 0.0;
    }
    100.0 * (own.net() - opp.net()) / decided
}
