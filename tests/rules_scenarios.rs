use std::collections::BTreeSet;

use tabula_chess::chess_errors::ChessError;
use tabula_chess::engines::engine_heuristic::HeuristicEngine;
use tabula_chess::game::game::Game;
use tabula_chess::game::game_status::GameStatus;
use tabula_chess::game_state::board::Board;
use tabula_chess::game_state::chess_types::{Color, PieceKind, Square};
use tabula_chess::move_generation::legal_move_checks::is_square_attacked;
use tabula_chess::utils::algebraic::algebraic_to_square;

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("valid square")
}

fn squares(names: &[&str]) -> BTreeSet<Square> {
    names.iter().map(|name| sq(name)).collect()
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        game.try_move(sq(from), sq(to), None)
            .unwrap_or_else(|e| panic!("{from}{to} should be legal: {e}"));
    }
}

#[test]
fn opening_pawn_has_single_and_double_step() {
    let game = Game::new();
    assert_eq!(
        game.legal_destinations(sq("e2")).expect("kings present"),
        squares(&["e3", "e4"])
    );
    assert_eq!(
        game.legal_destinations(sq("g1")).expect("kings present"),
        squares(&["f3", "h3"])
    );
}

#[test]
fn en_passant_is_offered_once_then_expires() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
    assert!(game
        .legal_destinations(sq("e5"))
        .expect("kings present")
        .contains(&sq("d6")));

    play(&mut game, &[("g1", "f3"), ("a6", "a5")]);
    assert!(!game
        .legal_destinations(sq("e5"))
        .expect("kings present")
        .contains(&sq("d6")));
    assert!(matches!(
        game.try_move(sq("e5"), sq("d6"), None),
        Err(ChessError::IllegalMove { .. })
    ));
}

#[test]
fn en_passant_capture_clears_the_passed_pawn() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")]);
    let record = game.try_move(sq("e5"), sq("d6"), None).expect("exd6 e.p.");

    assert!(record.is_en_passant);
    assert_eq!(record.notation, "exd6");
    assert_eq!(game.board().piece_at(sq("d5")), None);
}

#[test]
fn castling_is_offered_then_withdrawn_after_the_rook_moves() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("f8", "c5")],
    );
    assert!(game
        .legal_destinations(sq("e1"))
        .expect("kings present")
        .contains(&sq("g1")));

    play(&mut game, &[("h1", "g1"), ("g8", "f6"), ("g1", "h1"), ("f6", "g8")]);
    let king = game.legal_destinations(sq("e1")).expect("kings present");
    assert!(!king.contains(&sq("g1")));
    assert!(king.contains(&sq("f1")));
}

#[test]
fn castling_is_withdrawn_after_the_king_steps_out_and_back() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("f8", "c5")],
    );
    play(&mut game, &[("e1", "e2"), ("g8", "f6"), ("e2", "e1"), ("f6", "g8")]);

    let king = game.legal_destinations(sq("e1")).expect("kings present");
    assert!(!king.contains(&sq("g1")));
    assert!(king.contains(&sq("f1")));
    assert!(king.contains(&sq("e2")));
}

#[test]
fn castling_moves_the_rook_and_records_o_o() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6"), ("f1", "c4"), ("f8", "c5")],
    );
    let record = game.try_move(sq("e1"), sq("g1"), None).expect("O-O is legal");

    assert!(record.is_castling);
    assert_eq!(record.notation, "O-O");
    assert_eq!(game.board().piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(game.board().piece_at(sq("h1")), None);
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
    let record = game.try_move(sq("d8"), sq("h4"), None).expect("Qh4 is legal");

    assert_eq!(record.notation, "Qh4#");
    assert!(record.is_check && record.is_checkmate);
    assert_eq!(game.status(), Ok(GameStatus::Checkmate(Color::Black)));

    let mut engine = HeuristicEngine::with_seed(5);
    assert_eq!(game.bot_move(&mut engine), Err(ChessError::NoLegalMoves));
}

#[test]
fn ten_move_stalemate() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            ("e2", "e3"),
            ("a7", "a5"),
            ("d1", "h5"),
            ("a8", "a6"),
            ("h5", "a5"),
            ("h7", "h5"),
            ("h2", "h4"),
            ("a6", "h6"),
            ("a5", "c7"),
            ("f7", "f6"),
            ("c7", "d7"),
            ("e8", "f7"),
            ("d7", "b7"),
            ("d8", "d3"),
            ("b7", "b8"),
            ("d3", "h7"),
            ("b8", "c8"),
            ("f7", "g6"),
        ],
    );
    let record = game.try_move(sq("c8"), sq("e6"), None).expect("Qe6 is legal");

    assert_eq!(record.notation, "Qe6");
    assert!(!record.is_check);
    assert_eq!(game.status(), Ok(GameStatus::Stalemate));
    let notation: Vec<&str> = game
        .history()
        .records()
        .iter()
        .map(|r| r.notation.as_str())
        .collect();
    assert_eq!(notation[10], "Qxd7+");
}

#[test]
fn every_history_index_round_trips_through_goto() {
    let mut game = Game::new();
    play(
        &mut game,
        &[("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5"), ("b1", "c3"), ("d5", "a5")],
    );
    let live = game.live_board().clone();

    let mut boards = Vec::new();
    for index in 0..game.history().len() {
        boards.push(game.goto(Some(index)).expect("index exists").clone());
    }
    assert_eq!(game.resume_live().expect("history replays"), &live);
    assert_eq!(game.board(), &live);
    assert_eq!(boards.last(), Some(&live));
    assert_eq!(boards[2].piece_at(sq("d5")).map(|p| p.color), Some(Color::White));
    assert_eq!(boards[3].piece_at(sq("d5")).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn status_is_idempotent_and_pure() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4"), ("f7", "f6"), ("d1", "h5")]);
    let before = game.live_board().clone();

    let first = game.status().expect("kings present");
    let second = game.status().expect("kings present");
    assert_eq!(first, GameStatus::Check(Color::Black));
    assert_eq!(first, second);
    assert_eq!(game.live_board(), &before);
}

#[test]
fn rejected_moves_leave_board_and_history_untouched() {
    let mut game = Game::new();
    play(&mut game, &[("e2", "e4")]);
    let board = game.live_board().clone();
    let records = game.history().records().to_vec();

    for (from, to) in [("e4", "e5"), ("e7", "e4"), ("d7", "d4"), ("e1", "e2"), ("h3", "h4")] {
        assert!(game.try_move(sq(from), sq(to), None).is_err(), "{from}{to}");
    }
    assert_eq!(game.live_board(), &board);
    assert_eq!(game.history().records(), records.as_slice());
}

#[test]
fn bot_self_play_never_leaves_its_own_king_attacked() {
    for seed in 0..4u64 {
        let mut game = Game::new();
        let mut white = HeuristicEngine::with_seed(seed);
        let mut black = HeuristicEngine::with_seed(seed + 100);

        for _ in 0..80 {
            if game.status().expect("kings present").is_terminal() {
                break;
            }
            let mover = game.side_to_move();
            let played = match mover {
                Color::White => game.bot_move(&mut white),
                Color::Black => game.bot_move(&mut black),
            };
            played.expect("bot has a legal move");

            let board: &Board = game.live_board();
            let king = board.king_square(mover).expect("king stays on the board");
            assert!(
                !is_square_attacked(board, king, mover.opposite()),
                "seed {seed}: {mover:?} king left attacked"
            );
        }

        let replayed = game
            .history()
            .replay(game.history().last_index())
            .expect("history replays");
        assert_eq!(&replayed, game.live_board(), "seed {seed}");
    }
}
