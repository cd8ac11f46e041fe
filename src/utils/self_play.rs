//! Bot-vs-bot match harness.
//!
//! Runs two `Engine` implementations against each other on a `Game` until
//! the status turns terminal or the ply limit is hit. `play_self_play` seeds
//! a heuristic bot for each color from one base seed so a whole game is
//! reproducible.

use log::info;

use crate::chess_errors::ChessResult;
use crate::engines::engine_heuristic::HeuristicEngine;
use crate::engines::engine_trait::Engine;
use crate::game::game::Game;
use crate::game::game_status::GameStatus;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfPlayOutcome {
    /// The payload color delivered mate.
    Checkmate(Color),
    Stalemate,
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    pub max_plies: usize,
    pub seed: u64,
    /// Log every ply at info level.
    pub verbose: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayResult {
    pub outcome: SelfPlayOutcome,
    pub plies: usize,
    pub moves: Vec<String>,
    pub game: Game,
}

/// Play `white` against `black` from the initial position.
pub fn play_match<W, B>(
    white: &mut W,
    black: &mut B,
    max_plies: usize,
    verbose: bool,
) -> ChessResult<SelfPlayResult>
where
    W: Engine + ?Sized,
    B: Engine + ?Sized,
{
    white.new_game();
    black.new_game();

    let mut game = Game::new();
    let mut moves = Vec::new();

    let outcome = loop {
        match game.status()? {
            GameStatus::Checkmate(winner) => break SelfPlayOutcome::Checkmate(winner),
            GameStatus::Stalemate => break SelfPlayOutcome::Stalemate,
            GameStatus::InProgress | GameStatus::Check(_) => {}
        }
        if moves.len() >= max_plies {
            break SelfPlayOutcome::MaxPlies;
        }

        let side = game.side_to_move();
        let record = match side {
            Color::White => game.bot_move(white)?,
            Color::Black => game.bot_move(black)?,
        };
        if verbose {
            info!("[self-play] ply {} {:?} {}", moves.len() + 1, side, record.notation);
        }
        moves.push(record.notation);
    };

    if verbose {
        info!("[self-play] finished after {} plies: {:?}", moves.len(), outcome);
    }

    Ok(SelfPlayResult {
        outcome,
        plies: moves.len(),
        moves,
        game,
    })
}

/// Heuristic bot against itself, both sides seeded from `config.seed`.
pub fn play_self_play(config: &SelfPlayConfig) -> ChessResult<SelfPlayResult> {
    let mut white = HeuristicEngine::with_seed(config.seed);
    let mut black = HeuristicEngine::with_seed(config.seed ^ 0xA5A5_5A5A_0123_4567);
    play_match(&mut white, &mut black, config.max_plies, config.verbose)
}
