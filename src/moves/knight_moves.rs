//! Knight movement rules: the eight L-shaped jumps.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColour, Square};
use crate::moves::chess_move::Move;

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub fn generate_knight_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    generate_step_moves(board, from, colour, &KNIGHT_OFFSETS, out);
}

/// Single-step offset enumeration shared by knights and kings.
pub fn generate_step_moves(
    board: &Board,
    from: Square,
    colour: PieceColour,
    offsets: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(target) = from.offset(d_row, d_col) else {
            continue;
        };

        match board.piece_at(target) {
            Some(piece) if piece.colour == colour => {}
            _ => out.push(Move::between(from, target)),
        }
    }
}
