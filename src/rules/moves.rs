//! Move generation and disc flipping
//!
//! A move at an empty cell is legal when, in at least one of the eight
//! directions, it is immediately followed by one or more opponent discs and
//! then by a disc of the mover's color. Every such run is flipped.

use crate::board::{Bitboard, Board, Color, Pos};

/// Direction vectors for ray scanning (8 directions)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, -1),  // W
    (0, 1),   // E
    (1, -1),  // SW
    (1, 0),   // S
    (1, 1),   // SE
];

/// Opponent discs bracketed by `color` playing at `pos` along one ray.
/// Empty if the ray runs off the board or hits an empty cell first.
#[inline]
fn ray_flips(board: &Board, pos: Pos, dr: i32, dc: i32, color: Color) -> Bitboard {
    let own = board.discs(color);
    let opp = board.discs(color.opponent());
    let mut run = Bitboard::new();

    let mut cur = pos.step(dr, dc);
    while let Some(p) = cur {
        if opp.get(p) {
            run.set(p);
        } else if own.get(p) {
            return run;
        } else {
            break;
        }
        cur = p.step(dr, dc);
    }
    Bitboard::new()
}

/// All discs flipped by `color` playing at `pos`.
///
/// Empty when the cell is off the board, occupied, or the move brackets
/// nothing, i.e. the move is legal iff the result is non-empty.
pub fn flips_for(board: &Board, pos: Pos, color: Color) -> Bitboard {
    if !pos.is_on_board() || !board.is_empty(pos) {
        return Bitboard::new();
    }
    let mut flips = Bitboard::new();
    for &(dr, dc) in &DIRECTIONS {
        flips |= ray_flips(board, pos, dr, dc, color);
    }
    flips
}

/// Legal moves as a bitboard
pub fn legal_moves_mask(board: &Board, color: Color) -> Bitboard {
    (!board.occupied())
        .iter_ones()
        .filter(|&pos| !flips_for(board, pos, color).is_empty())
        .collect()
}

/// Legal moves in row-major order
pub fn valid_moves(board: &Board, color: Color) -> Vec<Pos> {
    legal_moves_mask(board, color).iter_ones().collect()
}

/// Whether `color` has at least one legal move
pub fn has_any_move(board: &Board, color: Color) -> bool {
    (!board.occupied())
        .iter_ones()
        .any(|pos| !flips_for(board, pos, color).is_empty())
}
