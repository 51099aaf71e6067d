//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on a `Board`, with
//! an optional seeded random opening prefix.

use chrono::{DateTime, Local};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceColour;
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    Player1Win,
    Player2Win,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub started_at: DateTime<Local>,
    pub final_fen: String,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={}",
            self.games, self.player1_wins, self.player2_wins, self.draws
        )
    }
}

/// Play a single seeded match from the starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (board, side, opening_moves_lan) = apply_seeded_random_opening(
        Board::new_game(),
        PieceColour::White,
        &mut rng,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;

    play_engine_match_from_board(engine_white, engine_black, board, side, opening_moves_lan, config)
}

/// Play a match from a caller-provided position without a random opening.
pub fn play_engine_match_from_board(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    mut board: Board,
    mut side: PieceColour,
    opening_moves_lan: Vec<String>,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let started_at = Local::now();
    engine_white.new_game();
    engine_black.new_game();

    let params = GoParams::default();
    let mut played_moves_lan = Vec::<String>::new();
    let mut move_counts = [0u32; 2];
    let mut outcome = MatchOutcome::DrawMaxPlies;

    for _ in 0..config.max_plies {
        let legal_moves = board.get_valid_moves(side);
        if legal_moves.is_empty() {
            outcome = if board.is_in_check(side) {
                match side {
                    PieceColour::White => MatchOutcome::BlackWinCheckmate,
                    PieceColour::Black => MatchOutcome::WhiteWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            break;
        }

        let out = match side {
            PieceColour::White => engine_white.choose_move(&board, side, &params)?,
            PieceColour::Black => engine_black.choose_move(&board, side, &params)?,
        };
        move_counts[side.index()] += 1;

        let chosen = out
            .best_move
            .ok_or_else(|| format!("{side:?} engine returned no move with legal moves available"))?;
        if !legal_moves.contains(&chosen) {
            return Err(format!("{side:?} engine returned illegal move {chosen}"));
        }

        played_moves_lan.push(move_to_long_algebraic(chosen)?);
        board.make_move(chosen);
        side = side.opposite();
    }

    Ok(MatchResult {
        outcome,
        started_at,
        final_fen: generate_fen(&board, side),
        opening_moves_lan,
        played_moves_lan,
        white_move_count: move_counts[PieceColour::White.index()],
        black_move_count: move_counts[PieceColour::Black.index()],
    })
}

/// Play a series of matches and tally wins and draws per player.
///
/// Player colours are randomised each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut colour_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = colour_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let white_won = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => Some(true),
            MatchOutcome::BlackWinCheckmate => Some(false),
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => None,
        };

        let mapped = match white_won {
            Some(white_won) if white_won == player1_is_white => {
                stats.player1_wins += 1;
                SeriesOutcome::Player1Win
            }
            Some(_) => {
                stats.player2_wins += 1;
                SeriesOutcome::Player2Win
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::DrawStalemate {
                    SeriesOutcome::DrawStalemate
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} seed={} started={} player1_white={} result={:?} final={}",
                i + 1,
                config.games,
                seed,
                result.started_at.format("%Y-%m-%d %H:%M:%S"),
                player1_is_white,
                mapped,
                result.final_fen
            );
        }
    }

    Ok(stats)
}

fn apply_seeded_random_opening(
    mut board: Board,
    mut side: PieceColour,
    rng: &mut StdRng,
    min_plies: u8,
    max_plies: u8,
) -> Result<(Board, PieceColour, Vec<String>), String> {
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = rng.random_range(low..=high);

    for _ in 0..target_plies {
        let legal_moves = board.get_valid_moves(side);
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves_lan.push(move_to_long_algebraic(chosen)?);
        board.make_move(chosen);
        side = side.opposite();
    }

    Ok((board, side, opening_moves_lan))
}
