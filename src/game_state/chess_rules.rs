//! Canonical chess-rule constants.
//!
//! Static rule literals: board dimensions, material values, the starting
//! arrangement and the default lookahead depth.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: usize = 8;

/// Material values indexed by `PieceKind::index()`.
pub const PIECE_VALUES: [i32; 6] = [10, 30, 30, 50, 90, 900];

/// Back-rank order from the a-file to the h-file, identical for both sides.
pub const BACK_RANK_ORDER: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: usize = 0;
pub const BLACK_PAWN_ROW: usize = 1;
pub const WHITE_PAWN_ROW: usize = 6;
pub const WHITE_BACK_ROW: usize = 7;

/// Standard starting position as a FEN piece-placement field.
pub const STARTING_POSITION_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
