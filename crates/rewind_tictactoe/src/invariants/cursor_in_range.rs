//! Cursor invariant: the cursor always points into the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct CursorInRangeInvariant;

impl Invariant<GameState> for CursorInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing snapshot"
    }
}
