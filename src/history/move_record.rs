use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// One applied move, as kept in the game history. Never mutated after it is
/// appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    /// Captured piece, including the pawn taken en passant.
    pub captured: Option<Piece>,
    pub notation: String,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_en_passant: bool,
    pub is_castling: bool,
    pub promoted_to: Option<PieceKind>,
}
