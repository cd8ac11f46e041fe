//! Heuristic bot playing itself.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --seed 7 --max-plies 120 --verbose`
//!
//! Log level comes from `TABULA_LOG` (default `info`).

use env_logger::Env;
use log::info;

use tabula_chess::utils::render_game_state::render_board;
use tabula_chess::utils::self_play::{play_self_play, SelfPlayConfig};

fn parse_args() -> Result<SelfPlayConfig, String> {
    let mut config = SelfPlayConfig::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" | "-v" => config.verbose = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                config.seed = value
                    .parse()
                    .map_err(|_| format!("invalid --seed value '{value}'"))?;
            }
            "--max-plies" => {
                let value = args.next().ok_or("--max-plies needs a value")?;
                config.max_plies = value
                    .parse()
                    .map_err(|_| format!("invalid --max-plies value '{value}'"))?;
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }

    Ok(config)
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(Env::default().filter_or("TABULA_LOG", "info")).init();

    let config = parse_args()?;
    info!(
        "self-play seed={} max_plies={}",
        config.seed, config.max_plies
    );

    let result = play_self_play(&config).map_err(|e| e.to_string())?;

    let numbered: Vec<String> = result
        .moves
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect();
    println!("{}", numbered.join(" "));
    println!("{}", render_board(result.game.live_board()));
    println!("outcome: {:?} after {} plies", result.outcome, result.plies);
    Ok(())
}
