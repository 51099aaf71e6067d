//! Board-to-FEN placement generator.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Piece, PieceColour, PieceKind, Square};

/// Render the piece-placement field, starting from row 0.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_run = 0u8;

        for col in 0..BOARD_SIZE {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row + 1 < BOARD_SIZE {
            out.push('/');
        }
    }

    out
}

/// Placement plus side to move, for example `.../RNBQKBNR w`.
pub fn generate_fen(board: &Board, side_to_move: PieceColour) -> String {
    let side = match side_to_move {
        PieceColour::White => 'w',
        PieceColour::Black => 'b',
    };
    format!("{} {side}", generate_placement(board))
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.colour {
        PieceColour::White => ch.to_ascii_uppercase(),
        PieceColour::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, generate_placement};
    use crate::game_state::board::Board;
    use crate::game_state::chess_rules::STARTING_POSITION_PLACEMENT;
    use crate::game_state::chess_types::PieceColour;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn starting_board_generates_standard_placement() {
        assert_eq!(generate_placement(&Board::new_game()), STARTING_POSITION_PLACEMENT);
    }

    #[test]
    fn placement_after_a_move_parses_back_to_the_same_board() {
        let mut board = Board::new_game();
        board.make_move(Move::new(6, 4, 4, 4));
        let placement = generate_placement(&board);
        assert_eq!(placement, "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
        assert_eq!(parse_placement(&placement).expect("should parse"), board);
        assert_eq!(
            generate_fen(&board, PieceColour::Black),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
        );
    }
}
