//! One-ply heuristic bot.
//!
//! Every legal move gets a static score (material won, promotion, giving
//! check, pawn/knight centrality, a penalty for walking an unmoved king) and
//! the final pick is uniform among the best `top_n`. There is no search and
//! no model of the opponent's reply.
//!
//! The random source is owned by the engine so tests can seed it and assert
//! on the candidate set rather than on a single pick.

use log::{debug, trace};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::promotion_row;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::legal_moves_pawn::en_passant_victim;
use crate::moves::chess_move::ChessMove;

/// Tunable weights. `Default` is the standard bot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BotConfig {
    /// How many of the best-scored moves the final pick is drawn from.
    pub top_n: usize,
    pub capture_weight: f64,
    pub promotion_bonus: f64,
    pub check_bonus: f64,
    pub early_king_penalty: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            top_n: 3,
            capture_weight: 10.0,
            promotion_bonus: 5.0 * piece_value(PieceKind::Queen),
            check_bonus: 5.0,
            early_king_penalty: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: ChessMove,
    pub score: f64,
}

#[inline]
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 100.0,
    }
}

/// (4 - Manhattan distance to the board centre) / 2.
#[inline]
fn centrality(square: Square) -> f64 {
    let distance = (f64::from(square.row()) - 3.5).abs() + (f64::from(square.col()) - 3.5).abs();
    (4.0 - distance) / 2.0
}

pub struct HeuristicEngine<R: Rng = StdRng> {
    config: BotConfig,
    rng: R,
}

impl HeuristicEngine<StdRng> {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for HeuristicEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicEngine<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            config: BotConfig::default(),
            rng,
        }
    }

    pub fn with_config(mut self, config: BotConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Static score of `mv` for the piece standing on `mv.from`.
    pub fn score_move(&self, board: &Board, mv: ChessMove) -> f64 {
        let Some(piece) = board.piece_at(mv.from) else {
            return 0.0;
        };
        let cfg = &self.config;
        let mut score = 0.0;

        let captured = match board.piece_at(mv.to) {
            Some(target) => Some(target.kind),
            None if piece.kind == PieceKind::Pawn => {
                en_passant_victim(board, mv.from, mv.to, piece.color).map(|_| PieceKind::Pawn)
            }
            None => None,
        };
        if let Some(kind) = captured {
            score += piece_value(kind) * cfg.capture_weight;
        }

        if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(piece.color) {
            score += cfg.promotion_bonus;
        }

        if gives_check(board, mv, piece.color) {
            score += cfg.check_bonus;
        }

        if matches!(piece.kind, PieceKind::Pawn | PieceKind::Knight) {
            score += centrality(mv.to);
        }

        let is_castling = mv.from.col().abs_diff(mv.to.col()) == 2;
        if piece.kind == PieceKind::King && !piece.has_moved && !is_castling {
            score -= cfg.early_king_penalty;
        }

        score
    }

    /// All legal moves of `color`, best first. Ties keep generation order.
    pub fn rank_moves(&self, board: &Board, color: Color) -> ChessResult<Vec<ScoredMove>> {
        let mut scored: Vec<ScoredMove> = all_legal_moves(board, color)?
            .into_iter()
            .map(|mv| {
                let score = self.score_move(board, mv);
                trace!("candidate {mv} score {score}");
                ScoredMove { mv, score }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(scored)
    }

    /// The moves the final pick is drawn from.
    pub fn candidate_moves(&self, board: &Board, color: Color) -> ChessResult<Vec<ScoredMove>> {
        let mut ranked = self.rank_moves(board, color)?;
        ranked.truncate(self.config.top_n.max(1));
        Ok(ranked)
    }

    pub fn select_move(&mut self, board: &Board, color: Color) -> ChessResult<ChessMove> {
        let candidates = self.candidate_moves(board, color)?;
        let picked = candidates
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMoves)?;
        debug!(
            "bot picked {} (score {}) from {} candidates",
            picked.mv,
            picked.score,
            candidates.len()
        );
        Ok(picked.mv)
    }
}

/// Relocation-only simulation: does the moved piece leave the opponent's
/// king attacked?
fn gives_check(board: &Board, mv: ChessMove, mover: Color) -> bool {
    let mut sim = board.clone();
    sim.relocate(mv.from, mv.to);
    sim.king_square(mover.opposite())
        .is_some_and(|king| is_square_attacked(&sim, king, mover))
}

fn parse_weight(name: &str, value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid {name} value '{value}'"))
}

impl<R: Rng + Send> Engine for HeuristicEngine<R> {
    fn name(&self) -> &str {
        "Tabula Heuristic"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("TopMoves") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid TopMoves value '{value}'"))?;
            if parsed == 0 {
                return Err("TopMoves must be at least 1".to_owned());
            }
            self.config.top_n = parsed;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("CaptureWeight") {
            self.config.capture_weight = parse_weight(name, value)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("PromotionBonus") {
            self.config.promotion_bonus = parse_weight(name, value)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("CheckBonus") {
            self.config.check_bonus = parse_weight(name, value)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("EarlyKingPenalty") {
            self.config.early_king_penalty = parse_weight(name, value)?;
            return Ok(());
        }
        Err(format!("unknown option '{name}'"))
    }

    fn choose_move(&mut self, board: &Board) -> ChessResult<EngineOutput> {
        let color = board.side_to_move();
        let candidates = self.candidate_moves(board, color)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string heuristic_engine candidates {}",
            candidates.len()
        ));

        let Some(picked) = candidates.choose(&mut self.rng) else {
            return Ok(out);
        };

        debug!("{color:?} bot plays {} (score {})", picked.mv, picked.score);
        out.info_lines.push(format!(
            "info string heuristic_engine best {} score {}",
            picked.mv, picked.score
        ));
        out.best_move = Some(picked.mv);
        Ok(out)
    }
}
