//! Read-only views for presentation layers.
//!
//! Everything a front end needs to render a game is derived here from a
//! [`GameState`]: the status line and the labelled move list.

use crate::{GameState, Player, Snapshot};
use serde::Serialize;
use tracing::instrument;

/// Outcome of the snapshot at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// No line is complete and cells remain.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A player completed a line.
    Won(Player),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true unless the game is still in progress.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {next}"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "Draw: No more moves"),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveDescription {
    /// History index this entry jumps to.
    pub step: usize,
    /// Button label.
    pub label: String,
    /// Whether this entry is the snapshot at the cursor.
    pub is_current: bool,
}

impl GameState {
    /// Status of the snapshot at the cursor.
    pub fn status(&self) -> GameStatus {
        let current = self.current();
        match current.winner() {
            Some(win) => GameStatus::Won(win.player()),
            None if current.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// One description per history entry, oldest first.
    #[instrument(skip(self), fields(len = self.history().len()))]
    pub fn move_descriptions(&self) -> Vec<MoveDescription> {
        self.history()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveDescription {
                step,
                label: describe(step, snapshot),
                is_current: step == self.current_step(),
            })
            .collect()
    }

    /// Move list in presentation order: newest first when reversed.
    pub fn move_list(&self) -> Vec<MoveDescription> {
        let mut moves = self.move_descriptions();
        if self.is_reversed() {
            moves.reverse();
        }
        moves
    }
}

/// Labels one history entry.
fn describe(step: usize, snapshot: &Snapshot) -> String {
    let Some(mv) = snapshot.last_move() else {
        return "Go to game start".to_string();
    };
    if let Some(win) = snapshot.winner() {
        return format!("Go to {} won", win.player());
    }
    if snapshot.is_full() {
        return "Go to game over".to_string();
    }
    let (row, col) = snapshot.board().row_col(mv.cell);
    format!("Go to move #{step} ({row},{col})")
}
