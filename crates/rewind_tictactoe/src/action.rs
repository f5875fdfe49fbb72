//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each snapshot in a game's
//! history records the move that produced it.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their marker on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Row-major index of the cell the marker was placed on.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell of this move.
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The snapshot at the cursor already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", cell)]
    CellOccupied {
        /// Requested cell.
        cell: usize,
    },

    /// The cell is not on the board.
    #[display("Cell {} is out of range (board has {} cells)", cell, cells)]
    CellOutOfRange {
        /// Requested cell.
        cell: usize,
        /// Number of cells on the board.
        cells: usize,
    },
}

impl std::error::Error for MoveError {}

/// Precondition violations when creating or navigating a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Board size must be between 1 and [`crate::MAX_SIZE`].
    #[display("Invalid board size {}", size)]
    InvalidSize {
        /// Requested size.
        size: usize,
    },

    /// The requested step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
}

impl std::error::Error for GameError {}
