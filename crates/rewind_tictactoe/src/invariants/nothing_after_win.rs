//! Decided games stop growing.

use super::Invariant;
use crate::GameState;

/// Invariant: only the last snapshot of a history may be won or full.
pub struct NothingAfterWinInvariant;

impl Invariant<GameState> for NothingAfterWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snapshot| !snapshot.is_decided())
    }

    fn description() -> &'static str {
        "No snapshot follows a won or full board"
    }
}
