//! Terminal front-end: the human plays White, the engine answers as Black.
//!
//! Run with:
//! `cargo run --release -- --depth 3`
//! `cargo run --release -- --pseudo-legal`

use std::io::{self, BufRead, Write};

use minimax_chess::game_state::chess_types::PieceColour;
use minimax_chess::game_state::game_session::{Game, GameConfig, GameStatus};
use minimax_chess::search::minimax::MoveFilter;
use minimax_chess::utils::render_board::render_captured;

fn parse_config() -> Result<GameConfig, String> {
    let mut config = GameConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" | "-d" => {
                let value = args.next().ok_or("--depth needs a value")?;
                config.search_depth = value
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid depth: {value}"))?
                    .max(1);
            }
            "--pseudo-legal" => {
                config.search_interior_moves = MoveFilter::PseudoLegal;
                config.human_moves = MoveFilter::PseudoLegal;
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok(config)
}

fn print_position(game: &Game) {
    println!("{}", game.board());
    println!(
        "white captured: {}",
        render_captured(game.board(), PieceColour::White)
    );
    println!(
        "black captured: {}",
        render_captured(game.board(), PieceColour::Black)
    );
}

fn announce_if_over(game: &Game) -> bool {
    match game.status() {
        GameStatus::InProgress => false,
        GameStatus::KingCaptured { winner } => {
            println!("Game over: {winner:?} captured the king");
            true
        }
        GameStatus::NoValidMoves { side } => {
            if game.board().is_in_check(side) {
                println!("Game over: {side:?} is checkmated");
            } else {
                println!("Game over: {side:?} has no legal moves (stalemate)");
            }
            true
        }
    }
}

fn main() -> Result<(), String> {
    let config = parse_config()?;
    let mut game = Game::with_config(config);

    println!(
        "You play White. Enter moves like e2e4; 'moves' lists options, 'quit' exits. Engine depth {}.",
        game.search_depth()
    );
    print_position(&game);

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        print!("{:?}> ", game.turn());
        io::stdout().flush().map_err(|e| e.to_string())?;

        input.clear();
        let read = stdin_lock.read_line(&mut input).map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(());
        }

        match input.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "board" => {
                print_position(&game);
                continue;
            }
            "moves" => {
                let listed: Vec<String> =
                    game.valid_moves().iter().map(|mv| mv.to_string()).collect();
                println!("{}", listed.join(" "));
                continue;
            }
            text => {
                if let Err(err) = game.submit_long_algebraic(text) {
                    println!("{err}");
                    continue;
                }
            }
        }

        print_position(&game);
        if announce_if_over(&game) {
            return Ok(());
        }

        println!("Engine is thinking...");
        match game.play_engine_move() {
            Ok(Some(mv)) => {
                println!("Engine plays {mv}");
                print_position(&game);
            }
            Ok(None) => println!("Computer has no legal moves left"),
            Err(err) => println!("{err}"),
        }

        if announce_if_over(&game) {
            return Ok(());
        }
    }
}
