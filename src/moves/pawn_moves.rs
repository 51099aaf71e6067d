//! Pawn movement rules.
//!
//! Pawns are the only pieces whose moves depend on colour (direction) and on
//! their own position (double step from the starting row). Captures are
//! diagonal-forward only; there is no en passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_PAWN_ROW, WHITE_PAWN_ROW};
use crate::game_state::chess_types::{PieceColour, Square};
use crate::moves::chess_move::Move;

const CAPTURE_COLUMN_STEPS: [i32; 2] = [-1, 1];

#[inline]
pub const fn pawn_direction(colour: PieceColour) -> i32 {
    match colour {
        PieceColour::White => -1,
        PieceColour::Black => 1,
    }
}

#[inline]
pub const fn pawn_start_row(colour: PieceColour) -> usize {
    match colour {
        PieceColour::White => WHITE_PAWN_ROW,
        PieceColour::Black => BLACK_PAWN_ROW,
    }
}

pub fn generate_pawn_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    let direction = pawn_direction(colour);

    if let Some(one_step) = from.offset(direction, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(Move::between(from, one_step));

            if from.row == pawn_start_row(colour) {
                if let Some(two_step) = from.offset(2 * direction, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(Move::between(from, two_step));
                    }
                }
            }
        }
    }

    for d_col in CAPTURE_COLUMN_STEPS {
        if let Some(target) = from.offset(direction, d_col) {
            if matches!(board.piece_at(target), Some(piece) if piece.colour != colour) {
                out.push(Move::between(from, target));
            }
        }
    }
}
