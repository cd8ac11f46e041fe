use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_open_targets;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    push_open_targets(board, piece.color, knight_targets(from), out);
}
