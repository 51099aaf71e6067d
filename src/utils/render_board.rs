//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (rank 8) is printed first so the board reads from White's side.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Piece, PieceColour, PieceKind, Square};

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'0' + (BOARD_SIZE - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// One line listing the pieces `colour` has captured, e.g. `♛ ♞ ♟`.
pub fn render_captured(board: &Board, colour: PieceColour) -> String {
    board
        .captured(colour)
        .iter()
        .map(|piece| piece_to_unicode(*piece).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.colour, piece.kind) {
        (PieceColour::White, PieceKind::Pawn) => '♙',
        (PieceColour::White, PieceKind::Knight) => '♘',
        (PieceColour::White, PieceKind::Bishop) => '♗',
        (PieceColour::White, PieceKind::Rook) => '♖',
        (PieceColour::White, PieceKind::Queen) => '♕',
        (PieceColour::White, PieceKind::King) => '♔',
        (PieceColour::Black, PieceKind::Pawn) => '♟',
        (PieceColour::Black, PieceKind::Knight) => '♞',
        (PieceColour::Black, PieceKind::Bishop) => '♝',
        (PieceColour::Black, PieceKind::Rook) => '♜',
        (PieceColour::Black, PieceKind::Queen) => '♛',
        (PieceColour::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_captured};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::PieceColour;
    use crate::moves::chess_move::Move;

    #[test]
    fn renders_black_on_top() {
        let rendered = render_board(&Board::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }

    #[test]
    fn captured_pieces_are_listed_in_value_order() {
        let mut board = Board::new_game();
        board.make_move(Move::new(6, 4, 4, 4));
        board.make_move(Move::new(1, 3, 3, 3));
        board.make_move(Move::new(4, 4, 3, 3));
        assert_eq!(render_captured(&board, PieceColour::White), "♟");
        assert_eq!(render_captured(&board, PieceColour::Black), "");
    }
}
