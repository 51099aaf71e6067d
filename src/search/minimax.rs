//! Full-width minimax over material evaluation.
//!
//! No pruning, no move ordering and no transposition caching: every line is
//! searched to the configured depth and scored with `Board::evaluate` from
//! the engine side's point of view.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::PieceColour;
use crate::moves::chess_move::Move;

/// Which move set a search ply or a move validator works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveFilter {
    /// Moves that do not leave the mover's king capturable.
    #[default]
    Legal,
    /// Movement-shape moves only; the mover may walk into check.
    PseudoLegal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    /// Move set used below the root. The root always uses legal moves.
    pub interior_moves: MoveFilter,
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            ..Self::default()
        }
    }

    pub fn with_interior_moves(mut self, filter: MoveFilter) -> Self {
        self.interior_moves = filter;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            interior_moves: MoveFilter::Legal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub nodes: u64,
}

/// Score `board` for `ai_colour` looking `depth` plies ahead.
///
/// `maximizing` selects whose ply it is: `ai_colour` when true, the opponent
/// otherwise. A missing king or an empty move list ends the line with the
/// static evaluation.
pub fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    ai_colour: PieceColour,
    filter: MoveFilter,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0
        || !board.is_king_alive(PieceColour::White)
        || !board.is_king_alive(PieceColour::Black)
    {
        return board.evaluate(ai_colour);
    }

    let side = if maximizing {
        ai_colour
    } else {
        ai_colour.opposite()
    };

    let moves = board.moves_for(side, filter);
    if moves.is_empty() {
        return board.evaluate(ai_colour);
    }

    let scores = moves.into_iter().map(|mv| {
        let mut next = board.clone_position();
        next.make_move(mv);
        minimax(&next, depth - 1, !maximizing, ai_colour, filter, nodes)
    });

    if maximizing {
        scores.fold(i32::MIN, i32::max)
    } else {
        scores.fold(i32::MAX, i32::min)
    }
}

/// Pick the legal move for `ai_colour` with the highest minimax score.
///
/// Ties go to the earliest move in generation order. `best_move` is `None`
/// when `ai_colour` has no legal move.
pub fn best_move(board: &Board, ai_colour: PieceColour, config: SearchConfig) -> SearchResult {
    let depth = config.depth.max(1);
    let mut result = SearchResult::default();

    for mv in board.get_valid_moves(ai_colour) {
        let mut next = board.clone_position();
        next.make_move(mv);

        let score = minimax(
            &next,
            depth - 1,
            false,
            ai_colour,
            config.interior_moves,
            &mut result.nodes,
        );

        if result.best_score.map_or(true, |best| score > best) {
            result.best_score = Some(score);
            result.best_move = Some(mv);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::{best_move, minimax, MoveFilter, SearchConfig};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::PieceColour;
    use crate::moves::chess_move::Move;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn depth_one_takes_the_hanging_queen() {
        let board = parse_placement("4k3/8/8/8/q7/8/8/R3K2R").expect("placement should parse");

        let result = best_move(&board, PieceColour::White, SearchConfig::new(1));
        assert_eq!(result.best_move, Some(Move::new(7, 0, 4, 0)));
        assert_eq!(result.best_score, Some(board.evaluate(PieceColour::White) + 90));
    }

    #[test]
    fn depth_two_refuses_a_defended_pawn() {
        // Qxd5 wins a pawn but the d8 rook recaptures.
        let board = parse_placement("3r3k/8/8/3p4/8/8/8/K2Q4").expect("placement should parse");

        let greedy = best_move(&board, PieceColour::White, SearchConfig::new(1));
        assert_eq!(greedy.best_move, Some(Move::new(7, 3, 3, 3)));

        let careful = best_move(&board, PieceColour::White, SearchConfig::new(2));
        assert_ne!(careful.best_move, Some(Move::new(7, 3, 3, 3)));
        assert_eq!(careful.best_score, Some(board.evaluate(PieceColour::White)));
    }

    #[test]
    fn pseudo_legal_interior_still_finds_the_capture() {
        let board = parse_placement("3r3k/8/8/3p4/8/8/8/K2Q4").expect("placement should parse");
        let config = SearchConfig::new(2).with_interior_moves(MoveFilter::PseudoLegal);
        let result = best_move(&board, PieceColour::White, config);
        assert_ne!(result.best_move, Some(Move::new(7, 3, 3, 3)));
        assert_eq!(result.best_score, Some(board.evaluate(PieceColour::White)));
    }

    #[test]
    fn interior_filter_decides_whether_a_pinned_piece_recaptures() {
        // The g7 knight is pinned by the a1 bishop, so Qxf5 is only safe
        // when the reply ply respects the pin.
        let board = parse_placement("7k/6n1/8/5p2/8/3Q4/K7/B7").expect("placement should parse");
        let qxf5 = Move::new(5, 3, 3, 5);

        let legal = best_move(&board, PieceColour::White, SearchConfig::new(2));
        assert_eq!(legal.best_move, Some(qxf5));
        assert_eq!(legal.best_score, Some(board.evaluate(PieceColour::White) + 10));

        let pseudo = best_move(
            &board,
            PieceColour::White,
            SearchConfig::new(2).with_interior_moves(MoveFilter::PseudoLegal),
        );
        assert_ne!(pseudo.best_move, legal.best_move);
        assert_eq!(pseudo.best_score, Some(board.evaluate(PieceColour::White)));
        assert!(pseudo.nodes > legal.nodes);
    }

    #[test]
    fn repeated_searches_pick_the_same_move() {
        let board = Board::new_game();
        let config = SearchConfig::new(2);
        let first = best_move(&board, PieceColour::Black, config);
        let second = best_move(&board, PieceColour::Black, config);
        assert!(first.best_move.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn equal_scores_keep_the_first_generated_move() {
        let board = Board::new_game();
        let result = best_move(&board, PieceColour::White, SearchConfig::new(1));
        assert_eq!(
            result.best_move,
            board.get_valid_moves(PieceColour::White).first().copied()
        );
        assert_eq!(result.best_score, Some(0));
    }

    #[test]
    fn stalemated_side_has_no_move() {
        let board = parse_placement("k7/8/1Q6/8/8/8/8/4K3").expect("placement should parse");
        assert!(!board.is_in_check(PieceColour::Black));

        let result = best_move(&board, PieceColour::Black, SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn missing_king_is_a_leaf_at_any_depth() {
        let board = parse_placement("8/8/8/8/8/8/8/4K2R").expect("placement should parse");
        let mut nodes = 0;
        let score = minimax(&board, 5, true, PieceColour::Black, MoveFilter::Legal, &mut nodes);
        assert_eq!(score, -950);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn depth_is_clamped_to_one() {
        assert_eq!(SearchConfig::new(0).depth, 1);
        assert_eq!(SearchConfig::default().depth, 3);
        assert_eq!(SearchConfig::default().interior_moves, MoveFilter::Legal);
    }
}
