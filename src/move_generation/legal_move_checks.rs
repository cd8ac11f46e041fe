//! Attack and check detection.
//!
//! `is_square_attacked` scans outward from the target square for each attack
//! pattern independently: pawn diagonals, knight jumps, orthogonal and
//! diagonal rays (first occupied square only), and adjacent kings.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_pawn::en_passant_victim;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        matches!(
            board.piece_at(sq),
            Some(piece) if piece.color == attacker_color && kinds.contains(&piece.kind)
        )
    };

    // An attacking pawn stands one row behind the target, from its own view.
    let pawn_row = -pawn_direction(attacker_color);
    if [-1i8, 1i8]
        .into_iter()
        .filter_map(|d_col| square.offset(pawn_row, d_col))
        .any(|sq| holds(sq, &[PieceKind::Pawn]))
    {
        return true;
    }

    if knight_targets(square).any(|sq| holds(sq, &[PieceKind::Knight])) {
        return true;
    }

    let straight = [PieceKind::Rook, PieceKind::Queen];
    if ROOK_DIRECTIONS
        .into_iter()
        .filter_map(|dir| trace_ray(board, square, dir).last())
        .any(|sq| holds(sq, &straight))
    {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    if BISHOP_DIRECTIONS
        .into_iter()
        .filter_map(|dir| trace_ray(board, square, dir).last())
        .any(|sq| holds(sq, &diagonal))
    {
        return true;
    }

    king_targets(square).any(|sq| holds(sq, &[PieceKind::King]))
}

/// Whether `color`'s king is attacked. A missing king is an invariant
/// violation.
pub fn king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king = board
        .king_square(color)
        .ok_or_else(|| ChessError::InvariantViolation(format!("no {color:?} king on the board")))?;
    Ok(is_square_attacked(board, king, color.opposite()))
}

/// Simulate `from -> to` on a copy of the board and report whether `mover`'s
/// king is left in check.
///
/// Only the relocation is simulated, plus removal of the captured pawn for an
/// en-passant capture. The castling rook is not moved: castling squares are
/// vetted for attacks by the king generator.
pub fn would_result_in_check(
    board: &Board,
    from: Square,
    to: Square,
    mover: Color,
) -> ChessResult<bool> {
    let mut next = board.clone();
    if matches!(board.piece_at(from), Some(piece) if piece.kind == PieceKind::Pawn) {
        if let Some(victim) = en_passant_victim(board, from, to, mover) {
            next.set(victim, None);
        }
    }
    next.relocate(from, to);
    king_in_check(&next, mover)
}
