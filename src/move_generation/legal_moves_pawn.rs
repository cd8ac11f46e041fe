//! Pawn move generation.
//!
//! Single and double advances onto empty squares, diagonal captures, and the
//! en-passant capture against the pawn recorded as the board's en-passant
//! target.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_start_row};
use crate::game_state::chess_types::*;

pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    let color = piece.color;
    let d_row = pawn_direction(color);

    if let Some(one_step) = from.offset(d_row, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(one_step);

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * d_row, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != color => out.push(to),
            Some(_) => {}
            None => {
                if en_passant_victim(board, from, to, color).is_some() {
                    out.push(to);
                }
            }
        }
    }
}

/// Square of the pawn a `color` pawn on `from` captures en passant by moving
/// to `to`, or `None` when `from -> to` is not an en-passant capture.
///
/// The target must be the enemy pawn beside `from` on the destination file,
/// and `to` must be the empty square diagonally in front.
pub fn en_passant_victim(board: &Board, from: Square, to: Square, color: Color) -> Option<Square> {
    let target = board.en_passant_target()?;
    if to.row() as i8 - from.row() as i8 != pawn_direction(color)
        || (to.col() as i8 - from.col() as i8).abs() != 1
        || board.piece_at(to).is_some()
    {
        return None;
    }

    let beside = Square::new(from.row(), to.col())?;
    if target != beside {
        return None;
    }

    match board.piece_at(beside) {
        Some(victim) if victim.kind == PieceKind::Pawn && victim.color != color => Some(beside),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{en_passant_victim, generate_pawn_moves};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    fn pawn_moves(board: &Board, from: Square) -> Vec<Square> {
        let piece = board.piece_at(from).expect("pawn on square");
        let mut out = Vec::new();
        generate_pawn_moves(board, from, piece, &mut out);
        out.sort();
        out
    }

    #[test]
    fn start_pawn_has_single_and_double_step() {
        let board = Board::new_game();
        let moves = pawn_moves(&board, Square::at(6, 4));
        assert_eq!(moves, vec![Square::at(4, 4), Square::at(5, 4)]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        // White pawn e2, black knight e3.
        let board = parse_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - -").expect("fen should parse");
        assert!(pawn_moves(&board, Square::at(6, 4)).is_empty());
    }

    #[test]
    fn diagonal_capture_only_onto_enemy() {
        // White pawn e4, black pawn d5, white knight f5.
        let board = parse_fen("4k3/8/8/3p1N2/4P3/8/8/4K3 w - -").expect("fen should parse");
        let moves = pawn_moves(&board, Square::at(4, 4));
        assert_eq!(moves, vec![Square::at(3, 3), Square::at(3, 4)]);
    }

    #[test]
    fn en_passant_requires_matching_target() {
        // Black just played d7-d5 next to the white pawn on e5.
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6").expect("fen should parse");
        let e5 = Square::at(3, 4);
        let d6 = Square::at(2, 3);
        assert_eq!(en_passant_victim(&board, e5, d6, Color::White), Some(Square::at(3, 3)));
        assert!(pawn_moves(&board, e5).contains(&d6));

        let stale = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - -").expect("fen should parse");
        assert_eq!(en_passant_victim(&stale, e5, d6, Color::White), None);
        assert!(!pawn_moves(&stale, e5).contains(&d6));
    }
}
