//! Game status classification.
//!
//! Status is always derived from the board and the side to move; nothing
//! here is cached.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::king_in_check;
use crate::move_generation::legal_move_generator::has_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The payload color is in check.
    Check(Color),
    /// The payload color won.
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}

/// Classify the position for `side_to_move`.
pub fn evaluate_status(board: &Board, side_to_move: Color) -> ChessResult<GameStatus> {
    let in_check = king_in_check(board, side_to_move)?;
    let can_move = has_legal_moves(board, side_to_move)?;

    Ok(match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate(side_to_move.opposite()),
        (true, true) => GameStatus::Check(side_to_move),
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::InProgress,
    })
}
