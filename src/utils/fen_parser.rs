//! FEN-to-Board parser.
//!
//! Only the piece-placement field and the side-to-move field carry meaning
//! for this engine. Castling, en passant and clock fields are accepted and
//! ignored so standard FEN strings can be pasted in unchanged.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Piece, PieceColour, PieceKind, Square};

/// Parse a full or partial FEN string into a board and the side to move.
/// A missing side-to-move field defaults to White.
pub fn parse_fen(fen: &str) -> Result<(Board, PieceColour), String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let board = parse_placement(board_part)?;
    let side = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => PieceColour::White,
    };

    Ok((board, side))
}

/// Parse a FEN piece-placement field. The first rank listed is row 0.
pub fn parse_placement(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();
    let mut kings = [0u8; 2];

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= BOARD_SIZE {
                return Err("Board rank has too many files".to_owned());
            }

            if piece.kind == PieceKind::King {
                kings[piece.colour.index()] += 1;
                if kings[piece.colour.index()] > 1 {
                    return Err(format!(
                        "Board layout has more than one {:?} king",
                        piece.colour
                    ));
                }
            }

            board.place(Square::new(row, col), piece);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<PieceColour, String> {
    match side_part {
        "w" => Ok(PieceColour::White),
        "b" => Ok(PieceColour::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let colour = if ch.is_ascii_uppercase() {
        PieceColour::White
    } else {
        PieceColour::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(colour, kind))
}
