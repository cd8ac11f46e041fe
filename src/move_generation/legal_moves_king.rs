use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_row, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_open_targets;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    push_open_targets(board, piece.color, king_targets(from), out);
    generate_castling_moves(board, from, piece, out);
}

/// Castling is offered as the king's two-square hop from its home square when
/// king and rook are unmoved, the squares between them are empty, the king is
/// not in check and neither the square it crosses nor the one it lands on is
/// attacked.
fn generate_castling_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let on_home_square = from.row() == back_row(piece.color) && from.col() == KING_HOME_COL;
    if piece.has_moved || !on_home_square {
        return;
    }

    let enemy = piece.color.opposite();

    // Cannot castle out of check.
    if is_square_attacked(board, from, enemy) {
        return;
    }

    let row = from.row();
    for (rook_col, step) in [(KINGSIDE_ROOK_COL, 1i8), (QUEENSIDE_ROOK_COL, -1i8)] {
        let rook_ready = matches!(
            board.piece_at(Square::at(row, rook_col)),
            Some(rook)
                if rook.kind == PieceKind::Rook && rook.color == piece.color && !rook.has_moved
        );
        if !rook_ready {
            continue;
        }

        let (low, high) = if rook_col > KING_HOME_COL {
            (KING_HOME_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_HOME_COL)
        };
        if (low..high).any(|col| board.piece_at(Square::at(row, col)).is_some()) {
            continue;
        }

        let (Some(transit), Some(landing)) = (from.offset(0, step), from.offset(0, 2 * step))
        else {
            continue;
        };
        if is_square_attacked(board, transit, enemy) || is_square_attacked(board, landing, enemy) {
            continue;
        }

        out.push(landing);
    }
}
