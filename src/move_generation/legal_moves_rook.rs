//! Rook move generation.
//!
//! Ray-casts the four orthogonal directions; a ray's blocking square is kept
//! only when it holds an enemy piece.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_open_targets;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    generate_sliding_moves(board, from, piece, &ROOK_DIRECTIONS, out);
}

pub(crate) fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for direction in directions {
        push_open_targets(board, piece.color, trace_ray(board, from, *direction), out);
    }
}
