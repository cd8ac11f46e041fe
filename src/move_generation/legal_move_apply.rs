//! Move execution.
//!
//! `try_move` validates a request against the legal destination set and then
//! applies it. Application works on a copy of the board and commits only once
//! every step has succeeded, so a failed call leaves the position untouched.

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_row, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::chess_types::*;
use crate::history::move_record::MoveRecord;
use crate::history::notation::algebraic_notation;
use crate::move_generation::legal_move_checks::king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_destinations};
use crate::move_generation::legal_moves_pawn::en_passant_victim;

/// What a move did to the board, before check annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MoveEffects {
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promoted_to: Option<PieceKind>,
}

/// Validate and apply `from -> to` for the side to move.
///
/// `promotion` picks the piece for a pawn reaching the far rank (Queen when
/// `None`) and is ignored on any other move.
pub fn try_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveRecord> {
    let illegal = ChessError::IllegalMove { from, to };

    match board.piece_at(from) {
        Some(piece) if piece.color == board.side_to_move() => {}
        _ => return Err(illegal),
    }
    if !legal_destinations(board, from)?.contains(&to) {
        return Err(illegal);
    }

    apply_move(board, from, to, promotion)
}

/// Apply an already-validated move and build its history record.
pub(crate) fn apply_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveRecord> {
    let mut next = board.clone();
    let effects = make_move(&mut next, from, to, promotion)?;

    let defender = next.side_to_move();
    let is_check = king_in_check(&next, defender)?;
    let is_checkmate = is_check && !has_legal_moves(&next, defender)?;

    let mut record = MoveRecord {
        from,
        to,
        piece: effects.piece,
        captured: effects.captured,
        notation: String::new(),
        is_check,
        is_checkmate,
        is_en_passant: effects.is_en_passant,
        is_castling: effects.is_castling,
        promoted_to: effects.promoted_to,
    };
    record.notation = algebraic_notation(&record);

    debug!("applied {} ({}{})", record.notation, from, to);
    *board = next;
    Ok(record)
}

/// Relocate pieces and update rule state for `from -> to`, then pass the move
/// to the other side. No legality checks and no check annotation.
pub(crate) fn make_move(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<MoveEffects> {
    let piece = board
        .piece_at(from)
        .ok_or_else(|| ChessError::InvariantViolation(format!("no piece on {from}")))?;
    let mover = piece.color;
    let mut captured = board.piece_at(to);

    // Castling: the king hops two files and the rook jumps over it.
    let is_castling = piece.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2;
    if is_castling {
        let (rook_from_col, rook_to_col) = if to.col() > from.col() {
            (KINGSIDE_ROOK_COL, to.col() - 1)
        } else {
            (QUEENSIDE_ROOK_COL, to.col() + 1)
        };
        let rook = board.take(Square::at(from.row(), rook_from_col)).ok_or_else(|| {
            ChessError::InvariantViolation(format!("castling from {from} without a rook"))
        })?;
        board.set(Square::at(from.row(), rook_to_col), Some(rook.moved()));
    }

    let victim = if piece.kind == PieceKind::Pawn {
        en_passant_victim(board, from, to, mover)
    } else {
        None
    };
    if let Some(victim) = victim {
        captured = board.take(victim);
    }

    // Cleared every move, re-set only by a double step.
    board.set_en_passant_target(None);
    if piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        board.set_en_passant_target(Some(to));
    }

    let promoted_to = if piece.kind == PieceKind::Pawn && to.row() == promotion_row(mover) {
        let kind = promotion.unwrap_or(PieceKind::Queen);
        if !kind.is_promotion_target() {
            return Err(ChessError::InvalidPromotion(kind));
        }
        Some(kind)
    } else {
        None
    };

    let placed = Piece {
        kind: promoted_to.unwrap_or(piece.kind),
        ..piece.moved()
    };
    board.set(to, Some(placed));
    board.set(from, None);
    board.set_side_to_move(mover.opposite());

    Ok(MoveEffects {
        piece,
        captured,
        is_castling,
        is_en_passant: victim.is_some(),
        promoted_to,
    })
}
