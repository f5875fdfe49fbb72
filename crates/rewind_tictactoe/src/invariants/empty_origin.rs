//! Empty origin invariant: every history starts from a blank board.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: `history[0]` is the empty board with no move and no winner.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(origin) = game.history().first() else {
            return false;
        };
        origin.last_move().is_none()
            && origin.winner().is_none()
            && origin
                .board()
                .squares()
                .iter()
                .all(|s| *s == Square::Empty)
    }

    fn description() -> &'static str {
        "History starts from an empty board"
    }
}
