//! Draw detection logic for tic-tac-toe.

use super::win::detect_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is full with no completed line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && detect_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn fill(size: usize, cells: &[usize]) -> Board {
        cells
            .iter()
            .enumerate()
            .fold(Board::new(size).unwrap(), |board, (step, &cell)| {
                board.with_mark(cell, Player::for_step(step)).unwrap()
            })
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(3, &[4]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = fill(3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = fill(3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X wins the main diagonal on the last move.
        let board = fill(3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_single_cell_full_board_is_a_win() {
        let board = fill(1, &[0]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
