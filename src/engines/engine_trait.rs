//! Engine abstraction layer.
//!
//! Move-selection strategies sit behind a single trait so callers (the
//! `Game` session, the self-play harness, benches) can drive any of them the
//! same way.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::history::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::try_move;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Pick a move for the side to move. `best_move` is `None` when that side
    /// has no legal move.
    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput>;
}

/// Let `engine` choose a move for `color` and play it on `board`.
///
/// `color` must be the side to move. Promotions always pick a queen.
pub fn bot_move<E>(board: &mut Board, color: Color, engine: &mut E) -> ChessResult<MoveRecord>
where
    E: Engine + ?Sized,
{
    if board.side_to_move() != color {
        return Err(ChessError::WrongSideToMove(color));
    }

    let output = engine.choose_move(board)?;
    let chosen = output.best_move.ok_or(ChessError::NoLegalMoves)?;
    try_move(board, chosen.from, chosen.to, Some(PieceKind::Queen))
}
