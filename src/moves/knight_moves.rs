use crate::game_state::chess_types::Square;

/// The eight L-shaped (row, col) jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `square` reaches, ignoring occupancy.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let d4 = Square::at(4, 3);
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let a1 = Square::at(7, 0);
        let targets: Vec<Square> = knight_targets(a1).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::at(5, 1)));
        assert!(targets.contains(&Square::at(6, 2)));
    }
}
