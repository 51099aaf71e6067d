//! King movement rules: one step in any direction. No castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceColour, Square};
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::generate_step_moves;

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, from: Square, colour: PieceColour, out: &mut Vec<Move>) {
    generate_step_moves(board, from, colour, &KING_OFFSETS, out);
}
