use crate::game_state::chess_rules::pawn_direction;
use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` on `square` attacks (its two forward diagonals).
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::pawn_attack_targets;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn white_pawn_on_e2_attacks_d3_and_f3() {
        let e2 = Square::at(6, 4);
        let targets: Vec<Square> = pawn_attack_targets(Color::White, e2).collect();
        assert_eq!(targets, vec![Square::at(5, 3), Square::at(5, 5)]);
    }

    #[test]
    fn black_pawn_on_a7_attacks_only_b6() {
        let a7 = Square::at(1, 0);
        let targets: Vec<Square> = pawn_attack_targets(Color::Black, a7).collect();
        assert_eq!(targets, vec![Square::at(2, 1)]);
    }
}
