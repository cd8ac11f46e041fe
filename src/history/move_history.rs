//! Replayable move history with a time-travel cursor.
//!
//! Positions are never stored. Any historical board is reconstructed by
//! replaying records from the standard initial position, which makes the
//! replay of the full history identical to the live board.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::history::move_record::MoveRecord;
use crate::move_generation::legal_move_apply::make_move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
    /// Index of the last record in effect; `None` is the initial position.
    cursor: Option<usize>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Index of the newest record, `None` when empty.
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.records.len().checked_sub(1)
    }

    /// Whether the cursor points at the newest record.
    #[inline]
    pub fn at_live_edge(&self) -> bool {
        self.cursor == self.last_index()
    }

    /// Drop every record after the cursor, append `record` and move the
    /// cursor onto it.
    pub(crate) fn push(&mut self, record: MoveRecord) {
        let keep = self.cursor.map_or(0, |index| index + 1);
        self.records.truncate(keep);
        self.records.push(record);
        self.cursor = self.last_index();
    }

    pub(crate) fn set_cursor(&mut self, cursor: Option<usize>) -> ChessResult<()> {
        self.check_index(cursor)?;
        self.cursor = cursor;
        Ok(())
    }

    /// Rebuild the board after `records[..=index]`; `None` gives the initial
    /// position. Does not move the cursor.
    pub fn replay(&self, index: Option<usize>) -> ChessResult<Board> {
        self.check_index(index)?;

        let mut board = Board::new_game();
        let count = index.map_or(0, |index| index + 1);
        for record in &self.records[..count] {
            make_move(&mut board, record.from, record.to, record.promoted_to)?;
        }
        Ok(board)
    }

    fn check_index(&self, index: Option<usize>) -> ChessResult<()> {
        match index {
            Some(index) if index >= self.records.len() => Err(ChessError::HistoryIndexOutOfRange {
                index,
                len: self.records.len(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MoveHistory;
    use crate::chess_errors::ChessError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::try_move;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn play(history: &mut MoveHistory, board: &mut Board, from: &str, to: &str) {
        let record = try_move(board, sq(from), sq(to), None).expect("legal move");
        history.push(record);
    }

    #[test]
    fn replay_of_everything_matches_the_live_board() {
        let mut history = MoveHistory::new();
        let mut board = Board::new_game();
        play(&mut history, &mut board, "e2", "e4");
        play(&mut history, &mut board, "d7", "d5");
        play(&mut history, &mut board, "e4", "d5");

        assert_eq!(history.replay(history.last_index()).expect("valid index"), board);
        assert_eq!(history.replay(None).expect("initial"), Board::new_game());
        assert!(history.at_live_edge());
    }

    #[test]
    fn push_behind_the_edge_discards_later_records() {
        let mut history = MoveHistory::new();
        let mut board = Board::new_game();
        play(&mut history, &mut board, "e2", "e4");
        play(&mut history, &mut board, "e7", "e5");
        play(&mut history, &mut board, "g1", "f3");

        history.set_cursor(Some(0)).expect("index 0 exists");
        let mut branch = history.replay(Some(0)).expect("index 0 exists");
        play(&mut history, &mut branch, "c7", "c5");

        let notation: Vec<&str> = history.records().iter().map(|r| r.notation.as_str()).collect();
        assert_eq!(notation, vec!["e4", "c5"]);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let history = MoveHistory::new();
        assert_eq!(
            history.replay(Some(0)),
            Err(ChessError::HistoryIndexOutOfRange { index: 0, len: 0 })
        );
    }
}
