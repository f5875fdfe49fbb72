//! Alternating markers invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the move producing `history[i]` was made by X when `i - 1` is
/// even and by O otherwise.
///
/// Together with [`Player::for_step`] this keeps the next player a pure
/// function of the cursor.
pub struct AlternatingMarkersInvariant;

impl Invariant<GameState> for AlternatingMarkersInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .last_move()
                    .is_some_and(|mv| mv.player == Player::for_step(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
