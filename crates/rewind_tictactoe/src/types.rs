//! Core domain types for tic-tac-toe.

use crate::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game, identified by the marker they place.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is after `step` moves.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Largest supported board size.
pub const MAX_SIZE: usize = 64;

/// Square N×N board stored in row-major order.
///
/// Cell `r * size + c` holds row `r`, column `c`. Boards are values: placing
/// a marker produces a new board and leaves the original untouched, so older
/// snapshots in a history never observe later moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

/// Unchecked board data as it appears on the wire.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Board::new(raw.size)?;
        if raw.squares.len() != board.cells() {
            return Err(GameError::InvalidSize { size: raw.size });
        }
        Ok(Self {
            squares: raw.squares,
            ..board
        })
    }
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] when `size` is zero or above
    /// [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(GameError::InvalidSize { size });
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cells(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given cell, or `None` when out of range.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s marker at `cell`.
    ///
    /// Returns `None` when `cell` is out of range.
    pub fn with_mark(&self, cell: usize, player: Player) -> Option<Self> {
        if cell >= self.squares.len() {
            return None;
        }
        let mut next = self.clone();
        next.squares[cell] = Square::Occupied(player);
        Some(next)
    }

    /// Splits a cell index into `(row, col)`.
    pub fn row_col(&self, cell: usize) -> (usize, usize) {
        (cell / self.size, cell % self.size)
    }

    /// Joins `(row, col)` into a cell index, or `None` when off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, squares) in self.squares.chunks(self.size).enumerate() {
            if row > 0 {
                let rule = vec!["-"; self.size].join("+");
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let line = squares
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
