//! Mailbox board: an 8x8 grid of optional pieces plus per-side captured lists.
//!
//! `Board` is plain data. Lookahead works on copies (`clone_position`), so
//! exploring a hypothetical move never touches the original grid.

use std::fmt;

use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, BLACK_BACK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::{Piece, PieceColour, PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::moves::piece_moves::generate_piece_moves;
use crate::search::minimax::MoveFilter;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    // [colour] -> pieces captured BY that colour, highest value first.
    captured: [Vec<Piece>; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            tiles: [[None; BOARD_SIZE]; BOARD_SIZE],
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Fresh board in the standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        board.initialise();
        board
    }

    /// Clear every square and set up the starting position.
    ///
    /// Captured lists are left alone; start a new game from a new `Board`.
    pub fn initialise(&mut self) {
        self.tiles = [[None; BOARD_SIZE]; BOARD_SIZE];

        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            self.tiles[BLACK_BACK_ROW][col] = Some(Piece::new(PieceColour::Black, *kind));
            self.tiles[BLACK_PAWN_ROW][col] = Some(Piece::new(PieceColour::Black, PieceKind::Pawn));
            self.tiles[WHITE_PAWN_ROW][col] = Some(Piece::new(PieceColour::White, PieceKind::Pawn));
            self.tiles[WHITE_BACK_ROW][col] = Some(Piece::new(PieceColour::White, *kind));
        }
    }

    #[inline]
    pub fn is_inside_board(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.tiles
            .get(square.row)
            .and_then(|row| row.get(square.col))
            .copied()
            .flatten()
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    /// Off-board squares are ignored.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let tile = self.tiles.get_mut(square.row)?.get_mut(square.col)?;
        tile.replace(piece)
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.tiles.get_mut(square.row)?.get_mut(square.col)?.take()
    }

    /// Pieces captured by `colour`, highest value first.
    #[inline]
    pub fn captured(&self, colour: PieceColour) -> &[Piece] {
        &self.captured[colour.index()]
    }

    /// Iterate over occupied squares in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter_map(move |(col, tile)| tile.map(|piece| (Square::new(row, col), piece)))
        })
    }

    /// Copy of the grid only. Captured lists are not needed for lookahead.
    pub fn clone_position(&self) -> Self {
        Self {
            tiles: self.tiles,
            captured: [Vec::new(), Vec::new()],
        }
    }

    /// Apply `mv` without any legality check.
    ///
    /// An empty source square makes this a no-op. A piece on the destination
    /// is added to the mover's captured list.
    pub fn make_move(&mut self, mv: Move) {
        let Some(piece) = self.piece_at(mv.from) else {
            return;
        };
        if !Self::square_on_board(mv.to) {
            return;
        }

        if let Some(taken) = self.place(mv.to, piece) {
            insert_by_value(&mut self.captured[piece.colour.index()], taken);
        }
        self.remove(mv.from);
    }

    /// Every pseudo-legal move for `colour`, in row-major board order.
    pub fn generate_all_moves(&self, colour: PieceColour) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (square, piece) in self.occupied_squares() {
            if piece.colour == colour {
                generate_piece_moves(self, square, piece, &mut moves);
            }
        }
        moves
    }

    /// Pseudo-legal moves that do not leave `colour`'s king capturable.
    pub fn get_valid_moves(&self, colour: PieceColour) -> Vec<Move> {
        self.generate_all_moves(colour)
            .into_iter()
            .filter(|mv| {
                let mut probe = self.clone_position();
                probe.make_move(*mv);
                !probe.is_in_check(colour)
            })
            .collect()
    }

    #[inline]
    pub fn moves_for(&self, colour: PieceColour, filter: MoveFilter) -> Vec<Move> {
        match filter {
            MoveFilter::Legal => self.get_valid_moves(colour),
            MoveFilter::PseudoLegal => self.generate_all_moves(colour),
        }
    }

    pub fn king_square(&self, colour: PieceColour) -> Option<Square> {
        self.occupied_squares()
            .find(|(_, piece)| piece.colour == colour && piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    #[inline]
    pub fn is_king_alive(&self, colour: PieceColour) -> bool {
        self.king_square(colour).is_some()
    }

    /// True when some opposing pseudo-legal move lands on `colour`'s king.
    /// A missing king counts as check.
    pub fn is_in_check(&self, colour: PieceColour) -> bool {
        let Some(king) = self.king_square(colour) else {
            return true;
        };

        self.generate_all_moves(colour.opposite())
            .iter()
            .any(|mv| mv.to == king)
    }

    /// Own material minus opposing material.
    pub fn evaluate(&self, colour: PieceColour) -> i32 {
        self.occupied_squares()
            .map(|(_, piece)| {
                if piece.colour == colour {
                    piece.value()
                } else {
                    -piece.value()
                }
            })
            .sum()
    }

    #[inline]
    fn square_on_board(square: Square) -> bool {
        match (i32::try_from(square.row), i32::try_from(square.col)) {
            (Ok(row), Ok(col)) => Self::is_inside_board(row, col),
            _ => false,
        }
    }
}

/// Insert keeping descending value order; a new piece goes ahead of equal ones.
fn insert_by_value(pieces: &mut Vec<Piece>, piece: Piece) {
    let index = pieces
        .iter()
        .position(|existing| piece.value() >= existing.value())
        .unwrap_or(pieces.len());
    pieces.insert(index, piece);
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
