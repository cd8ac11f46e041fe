//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board setup, move
//! validation, move application, history navigation and the bot. Callers
//! match on it to decide what to surface to a user.
//!
//! Usage guidelines:
//! - `IllegalMove`, `WrongSideToMove`, `InvalidPromotion` and `ViewingHistory`
//!   are caller errors. They are reported, never retried by the engine.
//! - `NoLegalMoves` means the game is already over for the side asked to move;
//!   check `GameStatus` before asking the bot for a move.
//! - `InvariantViolation` indicates a corrupted position (for example a missing
//!   king). It cannot be reached through the public move API.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// `from`/`to` is not in the legal destination set for the side to move.
    IllegalMove { from: Square, to: Square },

    /// The side asked to move has no legal move (checkmate or stalemate).
    NoLegalMoves,

    /// The position broke a structural invariant, such as a king missing from
    /// the board.
    ///
    /// Payload: diagnostic text.
    InvariantViolation(String),

    /// A pawn cannot promote to this piece kind (pawn or king).
    InvalidPromotion(PieceKind),

    /// The bot was asked to move for a color that is not on move.
    WrongSideToMove(Color),

    /// A move was attempted while a historical position is being shown.
    ViewingHistory,

    /// `goto` was asked for a history index past the last record.
    HistoryIndexOutOfRange { index: usize, len: usize },

    /// A square name such as `"e4"` failed to parse.
    ///
    /// Payload: the offending text.
    InvalidAlgebraic(String),

    /// A position description could not be turned into a valid board.
    InvalidPosition(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove { from, to } => write!(f, "illegal move {from}{to}"),
            ChessError::NoLegalMoves => write!(f, "side to move has no legal moves"),
            ChessError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
            ChessError::InvalidPromotion(kind) => write!(f, "cannot promote to {kind:?}"),
            ChessError::WrongSideToMove(color) => write!(f, "{color:?} is not on move"),
            ChessError::ViewingHistory => {
                write!(f, "cannot move while a historical position is shown")
            }
            ChessError::HistoryIndexOutOfRange { index, len } => {
                write!(f, "history index {index} out of range for {len} records")
            }
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessError::InvalidPosition(msg) => write!(f, "invalid position: {msg}"),
        }
    }
}

impl Error for ChessError {}
