//! King step patterns.
//!
//! Castling is not a step pattern; it is produced by the king move generator
//! from the rook/king `has_moved` flags.

use crate::game_state::chess_types::Square;

/// The eight adjacent (row, col) steps.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}
