//! Minimax-backed engine.
//!
//! Thin adapter over `search::minimax::best_move` that reports depth, node
//! count and score as `info string` lines.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColour;
use crate::search::minimax::{best_move, MoveFilter, SearchConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::new(depth),
        }
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config: SearchConfig {
                depth: config.depth.max(1),
                ..config
            },
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::with_config(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: PieceColour,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth).max(1),
            ..self.config
        };

        let started = Instant::now();
        let result = best_move(board, side, config);
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} interior {}",
            config.depth,
            match config.interior_moves {
                MoveFilter::Legal => "legal",
                MoveFilter::PseudoLegal => "pseudo_legal",
            }
        ));
        out.info_lines.push(format!(
            "info string minimax_engine nodes {} time_ms {}",
            result.nodes, elapsed_ms
        ));
        if let Some(score) = result.best_score {
            out.info_lines
                .push(format!("info string minimax_engine score {}", score));
        }

        out.best_move = result.best_move;
        Ok(out)
    }
}
