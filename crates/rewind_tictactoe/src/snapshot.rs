//! Immutable board snapshots.

use crate::action::{GameError, Move, MoveError};
use crate::rules::{Win, detect_winner, is_full};
use crate::{Board, Square};
use serde::Serialize;
use tracing::instrument;

/// The board at one step of a game, with its outcome precomputed.
///
/// Snapshots are never modified after construction. Playing a move on a
/// snapshot produces the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Move>,
    winner: Option<Win>,
    is_full: bool,
}

impl Snapshot {
    /// Snapshot of an empty `size`×`size` board: no last move, no winner.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] when `size` is zero or above
    /// [`crate::MAX_SIZE`].
    pub fn origin(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Self {
            is_full: is_full(&board),
            winner: None,
            last_move: None,
            board,
        })
    }

    /// Board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this snapshot; `None` for the origin.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Completed line on this board, if any.
    pub fn winner(&self) -> Option<&Win> {
        self.winner.as_ref()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// True when the board is won or full.
    pub fn is_decided(&self) -> bool {
        self.winner.is_some() || self.is_full
    }

    /// Produces the snapshot that follows `mv`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if this snapshot already has a winner
    /// - [`MoveError::CellOutOfRange`] if the cell is not on the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a marker
    #[instrument(skip(self))]
    pub fn play(&self, mv: Move) -> Result<Self, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        match self.board.get(mv.cell) {
            None => {
                return Err(MoveError::CellOutOfRange {
                    cell: mv.cell,
                    cells: self.board.cells(),
                });
            }
            Some(Square::Occupied(_)) => return Err(MoveError::CellOccupied { cell: mv.cell }),
            Some(Square::Empty) => {}
        }

        let board = self
            .board
            .with_mark(mv.cell, mv.player)
            .ok_or(MoveError::CellOutOfRange {
                cell: mv.cell,
                cells: self.board.cells(),
            })?;

        Ok(Self {
            winner: detect_winner(&board),
            is_full: is_full(&board),
            last_move: Some(mv),
            board,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn origin(size: usize) -> Snapshot {
        Snapshot::origin(size).unwrap()
    }

    #[test]
    fn test_origin_is_blank() {
        let snapshot = origin(3);
        assert_eq!(snapshot.last_move(), None);
        assert!(snapshot.winner().is_none());
        assert!(!snapshot.is_full());
    }

    #[test]
    fn test_origin_rejects_zero_size() {
        assert_eq!(Snapshot::origin(0), Err(GameError::InvalidSize { size: 0 }));
    }

    #[test]
    fn test_play_leaves_previous_snapshot() {
        let before = origin(3);
        let after = before.play(Move::new(Player::X, 4)).unwrap();
        assert!(before.board().is_empty(4));
        assert_eq!(after.board().get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(after.last_move(), Some(Move::new(Player::X, 4)));
    }

    #[test]
    fn test_play_rejects_occupied() {
        let snapshot = origin(3).play(Move::new(Player::X, 4)).unwrap();
        assert_eq!(
            snapshot.play(Move::new(Player::O, 4)),
            Err(MoveError::CellOccupied { cell: 4 })
        );
    }

    #[test]
    fn test_play_rejects_out_of_range() {
        assert_eq!(
            origin(3).play(Move::new(Player::X, 9)),
            Err(MoveError::CellOutOfRange { cell: 9, cells: 9 })
        );
    }

    #[test]
    fn test_play_after_win_rejected() {
        let won = origin(1).play(Move::new(Player::X, 0)).unwrap();
        assert!(won.winner().is_some());
        assert!(won.is_decided());
        assert_eq!(won.play(Move::new(Player::O, 0)), Err(MoveError::GameOver));
    }
}
