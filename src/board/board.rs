//! Board structure with turn tracking

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Cell, Color, Pos, BOARD_SIZE};
use crate::error::{EngineError, Result};
use crate::rules::{self, GameOutcome};

/// Number of discs on the board before the first move
pub const INITIAL_DISCS: u32 = 4;

/// Game board: one bitboard per color plus the color to move.
///
/// `Board` is a small `Copy` value. The search expands the game tree by
/// copying it, and players mutate the one owned by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Black discs bitboard
    pub black: Bitboard,
    /// White discs bitboard
    pub white: Bitboard,
    to_move: Color,
}

impl Board {
    /// Standard opening position: White on (3,3) and (4,4), Black on (3,4)
    /// and (4,3), Black to move.
    pub fn new() -> Self {
        let mut board = Self::empty(Color::Black);
        board.place(Pos::new(3, 3), Color::White);
        board.place(Pos::new(4, 4), Color::White);
        board.place(Pos::new(3, 4), Color::Black);
        board.place(Pos::new(4, 3), Color::Black);
        board
    }

    /// Board with no discs at all (for setting up test positions)
    pub fn empty(to_move: Color) -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            to_move,
        }
    }

    /// Get cell contents at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if self.black.get(pos) {
            Cell::Black
        } else if self.white.get(pos) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a disc on the board without flipping anything.
    /// Use `apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, color: Color) {
        self.discs_mut(color.opponent()).clear(pos);
        self.discs_mut(color).set(pos);
    }

    /// Color whose turn it is
    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Same position with `color` to move
    #[must_use]
    pub fn with_to_move(mut self, color: Color) -> Self {
        self.to_move = color;
        self
    }

    /// Bitboard of one color's discs
    #[inline]
    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    fn discs_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Occupied cells of either color
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Number of discs of one color
    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Disc counts as `(own, opponent)` from `color`'s point of view
    #[inline]
    pub fn score(&self, color: Color) -> (u32, u32) {
        (self.count(color), self.count(color.opponent()))
    }

    /// Whether any move has been played since the opening position
    pub fn has_game_begun(&self) -> bool {
        self.disc_count() != INITIAL_DISCS
            || self.black != Board::new().black
            || self.white != Board::new().white
    }

    /// Legal moves for `color` in row-major order. Empty means the color must pass.
    pub fn valid_moves(&self, color: Color) -> Vec<Pos> {
        rules::valid_moves(self, color)
    }

    /// Whether `color` may play at `pos`
    #[inline]
    pub fn is_valid_move(&self, color: Color, pos: Pos) -> bool {
        !rules::flips_for(self, pos, color).is_empty()
    }

    /// Opponent discs that `color` playing at `pos` would flip
    #[inline]
    pub fn flips_for(&self, color: Color, pos: Pos) -> Bitboard {
        rules::flips_for(self, pos, color)
    }

    /// Play `color` at `pos`, flipping every bracketed run.
    ///
    /// Returns the flipped discs. Fails with `InvalidMove` and leaves the
    /// board untouched if the move is not legal. The turn passes to the
    /// opponent; forced passes are the caller's business.
    pub fn apply_move(&mut self, color: Color, pos: Pos) -> Result<Bitboard> {
        let flips = rules::flips_for(self, pos, color);
        if flips.is_empty() {
            return Err(EngineError::InvalidMove { pos, color });
        }
        self.apply_flips(color, pos, flips);
        Ok(flips)
    }

    /// Place and flip without validation. `flips` must come from `flips_for`.
    #[inline]
    pub(crate) fn apply_flips(&mut self, color: Color, pos: Pos, flips: Bitboard) {
        let own = self.discs(color) | flips;
        let opp = self.discs(color.opponent()) & !flips;
        *self.discs_mut(color) = own;
        *self.discs_mut(color.opponent()) = opp;
        self.discs_mut(color).set(pos);
        self.to_move = color.opponent();
    }

    /// Forced pass: hand the turn over without placing a disc
    #[inline]
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Neither color has a legal move (a full board is a special case)
    #[inline]
    pub fn is_terminal(&self) -> bool {
        rules::is_game_over(self)
    }

    /// Result of the game; `InProgress` until `is_terminal()`
    #[inline]
    pub fn winner(&self) -> GameOutcome {
        rules::outcome(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses 8 rows of 8 cells (`.` empty, `B` black, `W` white), the
    /// format produced by `Display`. Blank lines and surrounding spaces are
    /// ignored. The parsed board has Black to move.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty(Color::Black);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::InvalidBoard(format!(
                    "row {row} has {} cells",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    '.' | '-' => {}
                    'B' | 'b' | 'X' | 'x' => board.place(pos, Color::Black),
                    'W' | 'w' | 'O' | 'o' => board.place(pos, Color::White),
                    other => {
                        return Err(EngineError::InvalidBoard(format!(
                            "unexpected '{other}' at {pos}"
                        )))
                    }
                }
            }
        }
        Ok(board)
    }
}
