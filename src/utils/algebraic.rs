//! Square naming in algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the board's
//! row/column squares. File `a`..`h` is column 0..7; rank is `8 - row`.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square.col())
}

#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'8' - square.row())
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square), rank_char(square))
}

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }

    Square::new(b'8' - rank, file - b'a')
        .ok_or_else(|| ChessError::InvalidAlgebraic(text.to_owned()))
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(*self), rank_char(*self))
    }
}
