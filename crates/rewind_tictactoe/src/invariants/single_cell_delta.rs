//! Single cell delta invariant: each step changes exactly one cell.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: `history[i]` differs from `history[i - 1]` in exactly the cell
/// recorded as its last move, and that cell holds the mover's marker.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(mv) = after.last_move() else {
                return false;
            };
            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(cell, _)| cell)
                .collect::<Vec<_>>();

            before.board().size() == after.board().size()
                && changed == [mv.cell]
                && before.board().get(mv.cell) == Some(Square::Empty)
                && after.board().get(mv.cell) == Some(Square::Occupied(mv.player))
        })
    }

    fn description() -> &'static str {
        "Each step places exactly one marker on an empty cell"
    }
}
