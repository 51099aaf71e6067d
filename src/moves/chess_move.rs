//! Single-ply move value.
//!
//! A `Move` only records coordinates. Whether it is playable is decided by
//! the board and the per-piece rules, never by the value itself.

use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from: Square::new(from_row, from_col),
            to: Square::new(to_row, to_col),
        }
    }

    #[inline]
    pub const fn between(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Long algebraic form, for example `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (square_to_algebraic(self.from), square_to_algebraic(self.to)) {
            (Ok(from), Ok(to)) => write!(f, "{from}{to}"),
            _ => write!(
                f,
                "({},{})->({},{})",
                self.from.row, self.from.col, self.to.row, self.to.col
            ),
        }
    }
}
