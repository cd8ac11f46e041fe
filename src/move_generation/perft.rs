//! Perft: exhaustive legal-move tree counting for generator validation.
//!
//! One node per from/to pair. Promotions are not branched per piece; the
//! executor's default (queen) is played, so reference counts should be
//! taken from positions without promotions inside the searched depth.

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::move_generation::legal_move_apply::{apply_move, make_move};
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal move tree of depth `depth`.
pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, depth: u8) -> ChessResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generator.generate_legal_moves(board)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        make_move(&mut child, mv.from, mv.to, None)?;
        nodes += perft(generator, &child, depth - 1)?;
    }
    Ok(nodes)
}

/// Leaf count plus per-kind tallies of the moves leading to the leaves.
pub fn perft_counts<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for mv in generator.generate_legal_moves(board)? {
        let mut child = board.clone();
        if depth == 1 {
            let record = apply_move(&mut child, mv.from, mv.to, None)?;
            total.merge(PerftCounts {
                nodes: 1,
                captures: u64::from(record.captured.is_some()),
                en_passant: u64::from(record.is_en_passant),
                castles: u64::from(record.is_castling),
                promotions: u64::from(record.promoted_to.is_some()),
                checks: u64::from(record.is_check),
                checkmates: u64::from(record.is_checkmate),
            });
        } else {
            make_move(&mut child, mv.from, mv.to, None)?;
            total.merge(perft_counts(generator, &child, depth - 1)?);
        }
    }
    Ok(total)
}

/// Per-root-move leaf counts, for locating generator disagreements.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    board: &Board,
    depth: u8,
) -> ChessResult<Vec<(ChessMove, u64)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in generator.generate_legal_moves(board)? {
        let mut child = board.clone();
        make_move(&mut child, mv.from, mv.to, None)?;
        out.push((mv, perft(generator, &child, depth - 1)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts, perft_divide, PerftCounts};
    use crate::game_state::board::Board;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

    #[test]
    fn depth_zero_counts_single_node() {
        let board = Board::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &board, 0), Ok(1));
        assert_eq!(
            perft_counts(&LegalMoveGenerator, &board, 0),
            Ok(PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            })
        );
    }

    #[test]
    fn start_position_reference_counts() {
        let board = Board::new_game();
        assert_eq!(perft(&LegalMoveGenerator, &board, 1), Ok(20));
        assert_eq!(perft(&LegalMoveGenerator, &board, 2), Ok(400));

        let counts = perft_counts(&LegalMoveGenerator, &board, 3).expect("perft should succeed");
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_reference_counts() {
        let board = parse_fen(KIWIPETE).expect("fen should parse");

        let d1 = perft_counts(&LegalMoveGenerator, &board, 1).expect("perft should succeed");
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = perft_counts(&LegalMoveGenerator, &board, 2).expect("perft should succeed");
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn position_three_reference_counts() {
        let board = parse_fen(POSITION_3).expect("fen should parse");
        assert_eq!(perft(&LegalMoveGenerator, &board, 1), Ok(14));
        assert_eq!(perft(&LegalMoveGenerator, &board, 2), Ok(191));

        let d3 = perft_counts(&LegalMoveGenerator, &board, 3).expect("perft should succeed");
        assert_eq!(d3.nodes, 2812);
        assert_eq!(d3.captures, 209);
        assert_eq!(d3.en_passant, 2);
        assert_eq!(d3.checks, 267);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::new_game();
        let divided = perft_divide(&LegalMoveGenerator, &board, 2).expect("perft should succeed");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}
