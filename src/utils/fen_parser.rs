//! FEN-to-Board parser for position setup.
//!
//! Reads the placement and side-to-move fields (required) and the castling
//! and en-passant fields (optional). Clock fields are accepted and ignored.
//!
//! FEN has no per-piece `has_moved` flag, so it is derived: a pawn is unmoved
//! on its start row, a king on its home square is unmoved when its side keeps
//! any castling right, and a corner rook is unmoved when the matching right
//! is present. The FEN en-passant square names the square the pawn skipped;
//! the board stores the pawn's own square instead.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    back_row, pawn_direction, pawn_start_row, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");

    // Halfmove clock and fullmove number carry no meaning here.
    if parts.nth(2).is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    let placements = parse_board(board_part, rights)?;

    let mut board = Board::from_pieces(side_to_move, placements)?;
    board.set_en_passant_target(parse_en_passant_target(en_passant_part, side_to_move)?);
    Ok(board)
}

fn parse_board(board_part: &str, rights: CastlingRights) -> ChessResult<Vec<(Square, Piece)>> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut placements = Vec::with_capacity(32);
    for (row, row_str) in rows.iter().enumerate() {
        let row = row as u8;
        let mut col = 0u8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                col = col
                    .checked_add(empty_count as u8)
                    .filter(|c| *c <= 8)
                    .ok_or_else(|| invalid(&format!("rank {} has too many files", 8 - row)))?;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            let square = Square::new(row, col)
                .ok_or_else(|| invalid(&format!("rank {} has too many files", 8 - row)))?;

            let piece = Piece {
                kind,
                color,
                has_moved: !starts_unmoved(kind, color, square, rights),
            };
            placements.push((square, piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid(&format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(placements)
}

fn starts_unmoved(kind: PieceKind, color: Color, square: Square, rights: CastlingRights) -> bool {
    let home = square.row() == back_row(color);
    let i = color.index();
    match kind {
        PieceKind::Pawn => square.row() == pawn_start_row(color),
        PieceKind::King => {
            home && square.col() == KING_HOME_COL && (rights.kingside[i] || rights.queenside[i])
        }
        PieceKind::Rook => {
            home && ((square.col() == KINGSIDE_ROOK_COL && rights.kingside[i])
                || (square.col() == QUEENSIDE_ROOK_COL && rights.queenside[i]))
        }
        _ => true,
    }
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.kingside[Color::White.index()] = true,
            'Q' => rights.queenside[Color::White.index()] = true,
            'k' => rights.kingside[Color::Black.index()] = true,
            'q' => rights.queenside[Color::Black.index()] = true,
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(
    en_passant_part: &str,
    side_to_move: Color,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let skipped = algebraic_to_square(en_passant_part)?;
    // The pawn that double-stepped belongs to the side that just moved and
    // stands one row past the skipped square in its own direction.
    let pawn_square = skipped
        .offset(pawn_direction(side_to_move.opposite()), 0)
        .ok_or_else(|| invalid(&format!("invalid en-passant square: {en_passant_part}")))?;
    Ok(Some(pawn_square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidPosition(msg.to_owned())
}
