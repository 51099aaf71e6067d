//! Core value types shared by the board, move rules and search.
//!
//! Everything here is plain `Copy` data so boards can be duplicated by value
//! during lookahead.

use crate::game_state::board::Board;

/// Side owning a piece. White starts on row 7 and advances toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColour {
    White,
    Black,
}

impl PieceColour {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceColour::White => 0,
            PieceColour::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColour::White => PieceColour::Black,
            PieceColour::Black => PieceColour::White,
        }
    }
}

/// Piece kind (colour is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Fixed material value used by the evaluation and the captured lists.
    #[inline]
    pub const fn value(self) -> i32 {
        crate::game_state::chess_rules::PIECE_VALUES[self.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub colour: PieceColour,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(colour: PieceColour, kind: PieceKind) -> Self {
        Self { colour, kind }
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }
}

/// Board coordinate. Row 0 is Black's back rank, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed delta, returning `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Square> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if Board::is_inside_board(row, col) {
            Some(Square::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceColour, PieceKind, Square};

    #[test]
    fn opposite_colour_round_trips() {
        assert_eq!(PieceColour::White.opposite(), PieceColour::Black);
        assert_eq!(PieceColour::Black.opposite().opposite(), PieceColour::Black);
    }

    #[test]
    fn material_values_match_piece_table() {
        assert_eq!(PieceKind::Pawn.value(), 10);
        assert_eq!(PieceKind::Knight.value(), 30);
        assert_eq!(PieceKind::Bishop.value(), 30);
        assert_eq!(PieceKind::Rook.value(), 50);
        assert_eq!(PieceKind::Queen.value(), 90);
        assert_eq!(Piece::new(PieceColour::Black, PieceKind::King).value(), 900);
    }

    #[test]
    fn offset_rejects_squares_off_the_board() {
        let a8 = Square::new(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(0, -1), None);
        assert_eq!(a8.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }
}
