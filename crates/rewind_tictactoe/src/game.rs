//! Game state machine with a time-travel history.
//!
//! A [`GameState`] is a value. Every operation returns a new state and leaves
//! the receiver untouched, so a presentation layer can hold on to old states
//! freely. Snapshots are shared between states through [`Arc`]; branching
//! after a jump copies the pointer prefix and never rewrites a snapshot.

use crate::Player;
use crate::action::{GameError, Move, MoveError};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::snapshot::Snapshot;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// History of snapshots plus the cursor into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: Vec<Arc<Snapshot>>,
    current_step: usize,
    reversed: bool,
}

impl GameState {
    /// Starts a game on an empty `size`×`size` board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] when `size` is zero or above
    /// [`crate::MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let origin = Snapshot::origin(size)?;
        Ok(Self {
            history: vec![Arc::new(origin)],
            current_step: 0,
            reversed: false,
        })
    }

    /// Starts a game and plays `cells` in order through [`GameState::apply_move`].
    ///
    /// Rejected moves are skipped, exactly as a user clicking them would see.
    #[instrument(skip(cells))]
    pub fn replay(size: usize, cells: &[usize]) -> Result<Self, GameError> {
        let game = Self::new(size)?;
        Ok(cells.iter().fold(game, |game, &cell| game.apply_move(cell)))
    }

    /// Builds a state from raw parts, bypassing every check.
    #[cfg(test)]
    pub(crate) fn from_parts(
        history: Vec<Arc<Snapshot>>,
        current_step: usize,
        reversed: bool,
    ) -> Self {
        Self {
            history,
            current_step,
            reversed,
        }
    }

    /// Board size (rows and columns).
    pub fn size(&self) -> usize {
        self.current().board().size()
    }

    /// All snapshots, index 0 being the empty board.
    pub fn history(&self) -> &[Arc<Snapshot>] {
        &self.history
    }

    /// Index of the active snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whether the move list should be presented newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        // current_step is kept in range by every constructor and transition.
        &self.history[self.current_step]
    }

    /// Player who places the next marker, derived from the cursor's parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winning line of the active snapshot, for highlighting.
    pub fn winning_line(&self) -> Option<&[usize]> {
        self.current().winner().map(|win| win.line())
    }

    /// Places the next player's marker on `cell`.
    ///
    /// Any snapshots after the cursor are discarded before the new one is
    /// appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the active snapshot has a winner
    /// - [`MoveError::CellOutOfRange`] if `cell` is off the board
    /// - [`MoveError::CellOccupied`] if `cell` already holds a marker
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, cell: usize) -> Result<Self, MoveError> {
        let mv = Move::new(self.next_player(), cell);
        let snapshot = self.current().play(mv)?;

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(Arc::new(snapshot));

        let next = Self {
            current_step: history.len() - 1,
            history,
            reversed: self.reversed,
        };

        debug_assert!(
            HistoryInvariants::check_all(&next).is_ok(),
            "History invariants violated after {mv}"
        );

        let snapshot = next.current();
        if let Some(win) = snapshot.winner() {
            info!(winner = %win.player(), line = ?win.line(), "Game won");
        } else if snapshot.is_full() {
            info!("Board full, game drawn");
        }

        Ok(next)
    }

    /// Places the next player's marker on `cell`, or returns the state
    /// unchanged when the move is not allowed.
    pub fn apply_move(&self, cell: usize) -> Self {
        match self.try_apply_move(cell) {
            Ok(next) => next,
            Err(error) => {
                debug!(cell, %error, "Move ignored");
                self.clone()
            }
        }
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is not a history index.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            current_step: step,
            ..self.clone()
        })
    }

    /// Moves the cursor one step back, stopping at game start.
    pub fn step_back(&self) -> Self {
        self.jump_to(self.current_step.saturating_sub(1))
            .unwrap_or_else(|_| self.clone())
    }

    /// Moves the cursor one step forward, stopping at the latest snapshot.
    pub fn step_forward(&self) -> Self {
        self.jump_to(self.current_step + 1)
            .unwrap_or_else(|_| self.clone())
    }

    /// Flips the move list's presentation order.
    #[instrument(skip(self), fields(reversed = self.reversed))]
    pub fn toggle_reversed(&self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self.clone()
        }
    }
}
