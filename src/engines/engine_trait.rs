//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait (console play, matches).

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColour;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's own depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for `side` on `board`. `Ok` with `best_move == None`
    /// means `side` has nothing to play.
    fn choose_move(
        &mut self,
        board: &Board,
        side: PieceColour,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
