//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::search::minimax::{MoveFilter, SearchConfig};
use minimax_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Legal-every-ply search against the cheaper root-only variant.
    let player1 = || Box::new(MinimaxEngine::with_config(SearchConfig::new(2))) as Box<dyn Engine>;
    let player2 = || {
        Box::new(MinimaxEngine::with_config(
            SearchConfig::new(2).with_interior_moves(MoveFilter::PseudoLegal),
        )) as Box<dyn Engine>
    };

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 6,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 120,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
