use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Orthogonal (row, col) directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk from `from` (exclusive) in one direction, yielding every square up to
/// and including the first occupied one.
pub fn trace_ray(
    board: &Board,
    from: Square,
    (d_row, d_col): (i8, i8),
) -> impl Iterator<Item = Square> + '_ {
    let mut current = Some(from);
    std::iter::from_fn(move || {
        let next = current?.offset(d_row, d_col)?;
        current = if board.piece_at(next).is_some() {
            None
        } else {
            Some(next)
        };
        Some(next)
    })
}
