//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! `Square`s. Files `a..h` map to columns 0..7 and ranks `1..8` map to
//! rows 7..0 (`row = 8 - rank`).

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = (file - b'a') as usize;
    let row = BOARD_SIZE - (rank - b'0') as usize;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square.row >= BOARD_SIZE || square.col >= BOARD_SIZE {
        return Err(format!(
            "Square out of bounds: ({}, {})",
            square.row, square.col
        ));
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'0' + (BOARD_SIZE - square.row) as u8);

    Ok(format!("{file_char}{rank_char}"))
}
