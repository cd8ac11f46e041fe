//! Game session: the live board, its move history, and an optional
//! historical view.
//!
//! Viewing history never touches the live board or the records. Moves are
//! refused while a view is shown; the caller either returns to the live
//! edge (`resume_live`) or continues play from the viewed position
//! (`resume_from_view`).

use std::collections::BTreeSet;

use log::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{bot_move, Engine};
use crate::game::game_status::{evaluate_status, GameStatus};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::history::move_history::MoveHistory;
use crate::history::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::try_move;
use crate::move_generation::legal_move_generator::legal_destinations;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryView {
    index: Option<usize>,
    board: Board,
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    live: Board,
    history: MoveHistory,
    view: Option<HistoryView>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the standard initial position with an empty history.
    pub fn new_game(&mut self) {
        *self = Self::default();
    }

    /// The position on display: the historical view if one is shown,
    /// otherwise the live board.
    pub fn board(&self) -> &Board {
        self.view.as_ref().map_or(&self.live, |view| &view.board)
    }

    pub fn live_board(&self) -> &Board {
        &self.live
    }

    pub fn is_viewing_history(&self) -> bool {
        self.view.is_some()
    }

    /// History index of the displayed view, `Some(None)` for the initial
    /// position, `None` when no view is shown.
    pub fn viewed_index(&self) -> Option<Option<usize>> {
        self.view.as_ref().map(|view| view.index)
    }

    pub fn side_to_move(&self) -> Color {
        self.board().side_to_move()
    }

    /// Legal destinations from `from` on the live board. Empty while a
    /// historical view is shown, since no move can be made from it.
    pub fn legal_destinations(&self, from: Square) -> ChessResult<BTreeSet<Square>> {
        if self.is_viewing_history() {
            return Ok(BTreeSet::new());
        }
        legal_destinations(&self.live, from)
    }

    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<MoveRecord> {
        if self.is_viewing_history() {
            return Err(ChessError::ViewingHistory);
        }
        let record = try_move(&mut self.live, from, to, promotion)?;
        self.history.push(record.clone());
        Ok(record)
    }

    /// Status of the live position.
    pub fn status(&self) -> ChessResult<GameStatus> {
        evaluate_status(&self.live, self.live.side_to_move())
    }

    /// Let `engine` move for the side to move on the live board.
    pub fn bot_move<E>(&mut self, engine: &mut E) -> ChessResult<MoveRecord>
    where
        E: Engine + ?Sized,
    {
        if self.is_viewing_history() {
            return Err(ChessError::ViewingHistory);
        }
        let side = self.live.side_to_move();
        let record = bot_move(&mut self.live, side, engine)?;
        self.history.push(record.clone());
        Ok(record)
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Index of the last record in effect on the live board.
    pub fn cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    /// Show the position after `records[..=index]` (`None`: initial
    /// position). Selecting the live cursor closes the view.
    pub fn goto(&mut self, index: Option<usize>) -> ChessResult<&Board> {
        let board = self.history.replay(index)?;
        if index == self.history.cursor() {
            debug!("history view closed at live cursor {index:?}");
            self.view = None;
        } else {
            debug!("viewing history at {index:?}");
            self.view = Some(HistoryView { index, board });
        }
        Ok(self.board())
    }

    /// Close any view and rebuild the live board from the full history.
    pub fn resume_live(&mut self) -> ChessResult<&Board> {
        let last = self.history.last_index();
        self.live = self.history.replay(last)?;
        self.history.set_cursor(last)?;
        self.view = None;
        debug!("resumed live play at {last:?}");
        Ok(&self.live)
    }

    /// Continue play from the viewed position. Records after it stay until
    /// the next move replaces them.
    pub fn resume_from_view(&mut self) -> ChessResult<()> {
        let Some(view) = self.view.take() else {
            return Ok(());
        };
        self.history.set_cursor(view.index)?;
        self.live = view.board;
        debug!("resumed play from history index {:?}", view.index);
        Ok(())
    }
}
