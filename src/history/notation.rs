//! Short algebraic notation for applied moves.
//!
//! Castling renders as bare `O-O` / `O-O-O`, with no check marker. Everything
//! else is piece letter, the origin file for pawn captures, `x` on capture,
//! destination square, `=<piece>` on promotion, then `#` or `+`.
//!
//! Disambiguation between two like pieces reaching the same square (`Nbd7`)
//! is not produced.

use crate::game_state::chess_types::PieceKind;
use crate::history::move_record::MoveRecord;
use crate::utils::algebraic::{file_char, square_to_algebraic};

pub fn algebraic_notation(record: &MoveRecord) -> String {
    if record.is_castling {
        let castle = if record.to.col() > record.from.col() {
            "O-O"
        } else {
            "O-O-O"
        };
        return castle.to_owned();
    }

    let mut out = String::new();
    let is_capture = record.captured.is_some() || record.is_en_passant;

    if let Some(letter) = record.piece.kind.notation_letter() {
        out.push(letter);
    } else if is_capture {
        out.push(file_char(record.from));
    }

    if is_capture {
        out.push('x');
    }

    out.push_str(&square_to_algebraic(record.to));

    if let Some(letter) = record.promoted_to.and_then(PieceKind::notation_letter) {
        out.push('=');
        out.push(letter);
    }

    if record.is_checkmate {
        out.push('#');
    } else if record.is_check {
        out.push('+');
    }

    out
}
