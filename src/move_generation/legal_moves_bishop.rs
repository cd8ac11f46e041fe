use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_rook::generate_sliding_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    generate_sliding_moves(board, from, piece, &BISHOP_DIRECTIONS, out);
}
