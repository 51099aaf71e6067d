//! Per-kind dispatch for pseudo-legal move generation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};

/// Append every destination `piece` standing on `from` can reach by its
/// movement shape. Own-king safety is not considered here.
#[inline]
pub fn generate_piece_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let colour = piece.colour;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, colour, out),
        PieceKind::Knight => generate_knight_moves(board, from, colour, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, colour, out),
        PieceKind::Rook => generate_rook_moves(board, from, colour, out),
        PieceKind::Queen => generate_queen_moves(board, from, colour, out),
        PieceKind::King => generate_king_moves(board, from, colour, out),
    }
}
