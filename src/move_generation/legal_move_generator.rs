//! Full legal move generation pipeline.
//!
//! Dispatches to the per-piece pseudo-legal generators, then filters every
//! candidate through `would_result_in_check` so that no returned move leaves
//! the mover's own king attacked.

use std::collections::BTreeSet;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::would_result_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;

/// Produces the legal moves of the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board) -> ChessResult<Vec<ChessMove>>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board) -> ChessResult<Vec<ChessMove>> {
        all_legal_moves(board, board.side_to_move())
    }
}

/// Destinations the piece on `from` may reach by its movement rules, without
/// regard to self-check. Empty when `from` is empty.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, &mut out),
        PieceKind::King => generate_king_moves(board, from, piece, &mut out),
    }
    out
}

/// Legal destinations of the piece on `from`, for highlighting.
pub fn legal_destinations(board: &Board, from: Square) -> ChessResult<BTreeSet<Square>> {
    let Some(piece) = board.piece_at(from) else {
        return Ok(BTreeSet::new());
    };

    let mut legal = BTreeSet::new();
    for to in pseudo_legal_destinations(board, from) {
        if !would_result_in_check(board, from, to, piece.color)? {
            legal.insert(to);
        }
    }
    Ok(legal)
}

/// Every legal move of `color`, pieces in row-major order.
pub fn all_legal_moves(board: &Board, color: Color) -> ChessResult<Vec<ChessMove>> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in board.pieces(color) {
        for to in pseudo_legal_destinations(board, from) {
            if !would_result_in_check(board, from, to, color)? {
                legal.push(ChessMove::new(from, to));
            }
        }
    }
    Ok(legal)
}

/// Short-circuiting form of `all_legal_moves(..).is_empty()`.
pub fn has_legal_moves(board: &Board, color: Color) -> ChessResult<bool> {
    for (from, _) in board.pieces(color) {
        for to in pseudo_legal_destinations(board, from) {
            if !would_result_in_check(board, from, to, color)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
