//! Long algebraic move notation (`e2e4`).
//!
//! Parsing is deliberately lenient about what it returns: anything that is
//! not exactly two on-board squares yields `None` instead of an error, so a
//! front-end can simply report "no move".

use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn long_algebraic_to_move(long_algebraic: &str) -> Option<Move> {
    let text = long_algebraic.trim();
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }

    let from = algebraic_to_square(&text[0..2]).ok()?;
    let to = algebraic_to_square(&text[2..4]).ok()?;
    Some(Move::between(from, to))
}

pub fn move_to_long_algebraic(mv: Move) -> Result<String, String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::moves::chess_move::Move;

    #[test]
    fn parses_file_and_rank_pairs() {
        assert_eq!(long_algebraic_to_move("e2e4"), Some(Move::new(6, 4, 4, 4)));
        assert_eq!(long_algebraic_to_move("a8h1"), Some(Move::new(0, 0, 7, 7)));
        assert_eq!(long_algebraic_to_move(" g1f3\n"), Some(Move::new(7, 6, 5, 5)));
    }

    #[test]
    fn malformed_text_is_no_move() {
        assert_eq!(long_algebraic_to_move(""), None);
        assert_eq!(long_algebraic_to_move("e2e"), None);
        assert_eq!(long_algebraic_to_move("e2e4q"), None);
        assert_eq!(long_algebraic_to_move("e9e4"), None);
        assert_eq!(long_algebraic_to_move("z2e4"), None);
        assert_eq!(long_algebraic_to_move("é2e4"), None);
    }

    #[test]
    fn formats_moves() {
        assert_eq!(
            move_to_long_algebraic(Move::new(1, 3, 3, 3)).expect("d7d5 should format"),
            "d7d5"
        );
        assert!(move_to_long_algebraic(Move::new(1, 3, 9, 3)).is_err());
    }
}
