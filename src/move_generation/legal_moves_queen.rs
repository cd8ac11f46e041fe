use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    generate_rook_moves(board, from, piece, out);
    generate_bishop_moves(board, from, piece, out);
}
