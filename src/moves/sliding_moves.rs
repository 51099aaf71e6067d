//! Bishop, rook and queen movement.
//!
//! All three share one ray walk: step along a direction until the ray leaves
//! the board, stops short of an own piece, or stops on an opposing piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColour, Square};
use crate::moves::chess_move::Move;

pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

pub fn walk_rays(
    board: &Board,
    from: Square,
    colour: PieceColour,
    directions: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;

        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(Move::between(from, next)),
                Some(piece) => {
                    if piece.colour != colour {
                        out.push(Move::between(from, next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

#[inline]
pub fn generate_bishop_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    walk_rays(board, from, colour, &BISHOP_DIRECTIONS, out);
}

#[inline]
pub fn generate_rook_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    walk_rays(board, from, colour, &ROOK_DIRECTIONS, out);
}

#[inline]
pub fn generate_queen_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    walk_rays(board, from, colour, &QUEEN_DIRECTIONS, out);
}
