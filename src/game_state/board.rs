//! Board model: the 8x8 grid, the side to move and the en-passant target.
//!
//! `Board` is plain data. Cell mutation is crate-private so that only the move
//! executor (and position setup) can change a position; everything else reads
//! through the accessors.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_row, pawn_start_row, BACK_RANK};
use crate::game_state::chess_types::*;

/// A complete chess position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
    /// Square of the pawn that just advanced two rows. Valid for the next
    /// move only.
    en_passant_target: Option<Square>,
}

impl Board {
    /// Board with no pieces, White to move.
    pub(crate) fn empty(side_to_move: Color) -> Self {
        Self {
            cells: [[None; 8]; 8],
            side_to_move,
            en_passant_target: None,
        }
    }

    /// Standard initial setup, White to move.
    pub fn new_game() -> Self {
        let mut board = Self::empty(Color::White);
        for color in [Color::White, Color::Black] {
            let back = back_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.set(Square::at(back, col), Some(Piece::new(*kind, color)));
                board.set(
                    Square::at(pawns, col),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board
    }

    /// Build a position from explicit placements.
    ///
    /// Fails unless each color has exactly one king and no square is listed
    /// twice.
    pub fn from_pieces<I>(side_to_move: Color, pieces: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Self::empty(side_to_move);
        for (square, piece) in pieces {
            if board.piece_at(square).is_some() {
                return Err(ChessError::InvalidPosition(format!(
                    "square {square} listed twice"
                )));
            }
            board.set(square, Some(piece));
        }
        board.validate_kings()?;
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Every piece of `color` with its square, row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_at(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target;
    }

    /// Move whatever stands on `from` to `to`, overwriting `to`. No rule
    /// bookkeeping; used for hypothetical positions.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.take(from);
        self.set(to, piece);
    }

    fn validate_kings(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidPosition(format!(
                    "{color:?} has {kings} kings"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::*;

    #[test]
    fn initial_setup_has_thirty_two_unmoved_pieces() {
        let board = Board::new_game();
        let white: Vec<_> = board.pieces(Color::White).collect();
        let black: Vec<_> = board.pieces(Color::Black).collect();
        assert_eq!(white.len(), 16);
        assert_eq!(black.len(), 16);
        assert!(white.iter().chain(black.iter()).all(|(_, p)| !p.has_moved));
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn kings_and_queens_on_their_files() {
        let board = Board::new_game();
        assert_eq!(board.king_square(Color::White), Some(Square::at(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::at(0, 4)));
        let white_queen = board.piece_at(Square::at(7, 3)).expect("d1 occupied");
        assert_eq!(white_queen.kind, PieceKind::Queen);
        assert_eq!(white_queen.color, Color::White);
    }

    #[test]
    fn from_pieces_requires_one_king_each() {
        let only_white_king = [(
            Square::at(7, 4),
            Piece::new(PieceKind::King, Color::White),
        )];
        let err = Board::from_pieces(Color::White, only_white_king)
            .expect_err("black king is missing");
        assert!(matches!(err, ChessError::InvalidPosition(_)));
    }

    #[test]
    fn from_pieces_rejects_duplicate_squares() {
        let pieces = [
            (Square::at(7, 4), Piece::new(PieceKind::King, Color::White)),
            (Square::at(7, 4), Piece::new(PieceKind::King, Color::Black)),
        ];
        assert!(Board::from_pieces(Color::White, pieces).is_err());
    }
}
