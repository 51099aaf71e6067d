//! Game session: one board, the side to move and the search settings.
//!
//! A `Game` is an explicit value, so several independent games can run side
//! by side. The board is mutated in place as moves are applied; only the
//! search works on copies.

use std::error::Error;
use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::PieceColour;
use crate::moves::chess_move::Move;
use crate::search::minimax::{best_move, MoveFilter, SearchConfig, SearchResult};
use crate::utils::long_algebraic::long_algebraic_to_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub search_depth: u8,
    /// Move set used below the search root.
    pub search_interior_moves: MoveFilter,
    /// Move set a submitted move must belong to.
    pub human_moves: MoveFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            search_interior_moves: MoveFilter::Legal,
            human_moves: MoveFilter::Legal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// A king has been taken off the board.
    KingCaptured { winner: PieceColour },
    /// `side` is to move and has no valid move (checkmate or stalemate).
    NoValidMoves { side: PieceColour },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameOver(GameStatus),
    IllegalMove(Move),
    UnparsableMove(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver(status) => write!(f, "game is over: {status:?}"),
            GameError::IllegalMove(mv) => write!(f, "invalid move: {mv}"),
            GameError::UnparsableMove(text) => write!(f, "could not read move: {text:?}"),
        }
    }
}

impl Error for GameError {}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: PieceColour,
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move, depth 3.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::new_game(), PieceColour::White, config)
    }

    pub fn from_board(board: Board, turn: PieceColour, config: GameConfig) -> Self {
        let mut game = Self {
            board,
            turn,
            config,
        };
        game.set_search_depth(config.search_depth);
        game
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> PieceColour {
        self.turn
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn search_depth(&self) -> u8 {
        self.config.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.config.search_depth = depth.max(1);
    }

    /// Moves the side to move may submit under the configured filter.
    pub fn valid_moves(&self) -> Vec<Move> {
        self.board.moves_for(self.turn, self.config.human_moves)
    }

    pub fn status(&self) -> GameStatus {
        for colour in [PieceColour::White, PieceColour::Black] {
            if !self.board.is_king_alive(colour) {
                return GameStatus::KingCaptured {
                    winner: colour.opposite(),
                };
            }
        }

        if self.board.get_valid_moves(self.turn).is_empty() {
            return GameStatus::NoValidMoves { side: self.turn };
        }

        GameStatus::InProgress
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Validate `mv` for the side to move, apply it and pass the turn.
    pub fn submit_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.ensure_in_progress()?;

        if !self.valid_moves().contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        self.apply(mv);
        Ok(())
    }

    /// Parse `text` as long algebraic (`e2e4`) and submit it.
    pub fn submit_long_algebraic(&mut self, text: &str) -> Result<Move, GameError> {
        let mv = long_algebraic_to_move(text)
            .ok_or_else(|| GameError::UnparsableMove(text.to_owned()))?;
        self.submit_move(mv)?;
        Ok(mv)
    }

    /// Search for `ai_colour`'s best move on the current board.
    pub fn get_best_move(&self, ai_colour: PieceColour) -> Option<Move> {
        self.search(ai_colour).best_move
    }

    pub fn search(&self, ai_colour: PieceColour) -> SearchResult {
        let config = SearchConfig::new(self.config.search_depth)
            .with_interior_moves(self.config.search_interior_moves);
        best_move(&self.board, ai_colour, config)
    }

    /// Let the engine play for the side to move. `Ok(None)` means it had no move.
    pub fn play_engine_move(&mut self) -> Result<Option<Move>, GameError> {
        self.ensure_in_progress()?;

        let chosen = self.get_best_move(self.turn);
        if let Some(mv) = chosen {
            self.apply(mv);
        }
        Ok(chosen)
    }

    fn apply(&mut self, mv: Move) {
        self.board.make_move(mv);
        self.turn = self.turn.opposite();
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::InProgress => Ok(()),
            status => Err(GameError::GameOver(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameConfig, GameError, GameStatus};
    use crate::game_state::chess_types::{PieceColour, PieceKind, Square};
    use crate::moves::chess_move::Move;
    use crate::search::minimax::MoveFilter;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn new_game_defaults() {
        let game = Game::new();
        assert_eq!(game.turn(), PieceColour::White);
        assert_eq!(game.search_depth(), 3);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.valid_moves().len(), 20);
    }

    #[test]
    fn submitted_move_is_applied_and_turn_passes() {
        let mut game = Game::new();
        let mv = game.submit_long_algebraic("e2e4").expect("e2e4 is legal");
        assert_eq!(mv, Move::new(6, 4, 4, 4));
        assert_eq!(game.turn(), PieceColour::Black);
        assert_eq!(
            game.board().piece_at(Square::new(4, 4)).map(|p| p.kind),
            Some(PieceKind::Pawn)
        );
    }

    #[test]
    fn wrong_side_and_malformed_moves_are_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.submit_long_algebraic("e7e5"),
            Err(GameError::IllegalMove(Move::new(1, 4, 3, 4)))
        );
        assert_eq!(
            game.submit_long_algebraic("e2e5"),
            Err(GameError::IllegalMove(Move::new(6, 4, 3, 4)))
        );
        assert_eq!(
            game.submit_long_algebraic("hello"),
            Err(GameError::UnparsableMove("hello".to_owned()))
        );
        assert_eq!(game.turn(), PieceColour::White);
    }

    #[test]
    fn pseudo_legal_validation_allows_walking_into_check() {
        let board = parse_placement("4k3/8/8/8/4r3/8/4B3/4K3").expect("placement should parse");
        let pinned = Move::new(6, 4, 5, 3);

        let mut strict = Game::from_board(board.clone(), PieceColour::White, GameConfig::default());
        assert_eq!(strict.submit_move(pinned), Err(GameError::IllegalMove(pinned)));

        let permissive = GameConfig {
            human_moves: MoveFilter::PseudoLegal,
            ..GameConfig::default()
        };
        let mut loose = Game::from_board(board, PieceColour::White, permissive);
        assert_eq!(loose.submit_move(pinned), Ok(()));
    }

    #[test]
    fn engine_reply_alternates_turns() {
        let mut game = Game::with_config(GameConfig {
            search_depth: 1,
            ..GameConfig::default()
        });
        game.submit_long_algebraic("d2d4").expect("d2d4 is legal");
        let reply = game
            .play_engine_move()
            .expect("game is running")
            .expect("black has moves");
        assert_eq!(game.turn(), PieceColour::White);
        assert_eq!(
            game.board().piece_at(reply.to).map(|p| p.colour),
            Some(PieceColour::Black)
        );
    }

    #[test]
    fn engine_captures_for_the_side_to_move() {
        let board = parse_placement("4k3/8/8/8/q7/8/8/R3K3").expect("placement should parse");
        let mut game = Game::from_board(
            board,
            PieceColour::White,
            GameConfig {
                search_depth: 2,
                ..GameConfig::default()
            },
        );
        assert_eq!(game.get_best_move(PieceColour::White), Some(Move::new(7, 0, 4, 0)));
        game.play_engine_move().expect("game is running");
        assert_eq!(game.board().captured(PieceColour::White)[0].kind, PieceKind::Queen);
    }

    #[test]
    fn checkmate_ends_the_game() {
        // Back-rank mate: black to move with no escape.
        let board = parse_placement("R5k1/5ppp/8/8/8/8/8/6K1").expect("placement should parse");
        let mut game = Game::from_board(board, PieceColour::Black, GameConfig::default());

        assert_eq!(game.status(), GameStatus::NoValidMoves { side: PieceColour::Black });
        assert!(game.is_game_over());
        assert_eq!(game.get_best_move(PieceColour::Black), None);
        assert!(matches!(game.play_engine_move(), Err(GameError::GameOver(_))));
    }

    #[test]
    fn captured_king_ends_the_game() {
        let board = parse_placement("8/8/8/8/8/8/8/4K2R").expect("placement should parse");
        let game = Game::from_board(board, PieceColour::Black, GameConfig::default());
        assert_eq!(
            game.status(),
            GameStatus::KingCaptured { winner: PieceColour::White }
        );
    }

    #[test]
    fn independent_games_do_not_share_state() {
        let mut first = Game::new();
        let second = Game::new();
        first.submit_long_algebraic("g1f3").expect("g1f3 is legal");
        assert_eq!(second.turn(), PieceColour::White);
        assert_ne!(first.board(), second.board());
    }

    #[test]
    fn depth_is_never_below_one() {
        let mut game = Game::new();
        game.set_search_depth(0);
        assert_eq!(game.search_depth(), 1);
    }
}
