//! Move-path enumeration for move-generator verification.
//!
//! Counts leaf positions of the move tree rooted at a board, either over
//! legal moves or over raw pseudo-legal moves.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColour;
use crate::search::minimax::MoveFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
    }
}

pub fn perft(board: &Board, side: PieceColour, depth: u8, filter: MoveFilter) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();

    for mv in board.moves_for(side, filter) {
        let is_capture = board.piece_at(mv.to).is_some();
        let mut next = board.clone_position();
        next.make_move(mv);

        if depth == 1 {
            total.nodes += 1;
            if is_capture {
                total.captures += 1;
            }
            if next.is_in_check(side.opposite()) {
                total.checks += 1;
            }
        } else {
            total.merge(perft(&next, side.opposite(), depth - 1, filter));
        }
    }

    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(
    board: &Board,
    side: PieceColour,
    depth: u8,
    filter: MoveFilter,
) -> Vec<(String, u64)> {
    board
        .moves_for(side, filter)
        .into_iter()
        .map(|mv| {
            let mut next = board.clone_position();
            next.make_move(mv);
            let nodes = perft(&next, side.opposite(), depth.saturating_sub(1), filter).nodes;
            (mv.to_string(), nodes)
        })
        .collect()
}
