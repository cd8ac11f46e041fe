//! Crate root module declarations for the Tabula chess rules engine.
//!
//! Exposes the board model, legal move generation and execution, the
//! replayable move history, game status, the heuristic bot, and utility
//! helpers so binaries, tests, and host applications can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod history {
    pub mod move_history;
    pub mod move_record;
    pub mod notation;
}

pub mod game {
    pub mod game;
    pub mod game_status;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
    pub mod self_play;
}
