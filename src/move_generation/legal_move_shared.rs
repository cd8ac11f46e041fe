use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Whether a piece of `color` may land on `square` under the ordinary
/// occupancy rule: empty or holding an enemy piece.
#[inline]
pub fn is_open_for(board: &Board, square: Square, color: Color) -> bool {
    match board.piece_at(square) {
        Some(piece) => piece.color != color,
        None => true,
    }
}

#[inline]
pub fn enemy_piece_on(board: &Board, square: Square, color: Color) -> Option<Piece> {
    board
        .piece_at(square)
        .filter(|piece| piece.color == color.opposite())
}

/// Push every square from `targets` that `color` may land on.
#[inline]
pub fn push_open_targets<I>(board: &Board, color: Color, targets: I, out: &mut Vec<Square>)
where
    I: IntoIterator<Item = Square>,
{
    out.extend(
        targets
            .into_iter()
            .filter(|square| is_open_for(board, *square, color)),
    );
}
