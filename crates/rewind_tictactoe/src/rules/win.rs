//! Win detection logic for N×N tic-tac-toe.

use crate::{Board, Player, Square};
use serde::Serialize;
use tracing::instrument;

/// A completed line: the player who owns it and the cells it runs through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Win {
    player: Player,
    line: Vec<usize>,
}

impl Win {
    /// Player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Cells of the line, in walk order.
    pub fn line(&self) -> &[usize] {
        &self.line
    }

    /// Checks if `cell` is part of the winning line.
    pub fn contains(&self, cell: usize) -> bool {
        self.line.contains(&cell)
    }
}

/// Yields every candidate line of a `size`×`size` board in check order.
///
/// Order: main diagonal (top-left to bottom-right), anti-diagonal (top-right
/// to bottom-left), rows top to bottom, columns left to right. When several
/// lines are complete at once, the first one in this order is reported.
pub fn winning_lines(size: usize) -> impl Iterator<Item = Vec<usize>> {
    let main = (0..size).map(move |i| i * size + i).collect::<Vec<_>>();
    let anti = (0..size)
        .map(move |i| i * size + (size - 1 - i))
        .collect::<Vec<_>>();
    let rows = (0..size).map(move |r| (0..size).map(|c| r * size + c).collect::<Vec<_>>());
    let cols = (0..size).map(move |c| (0..size).map(|r| r * size + c).collect::<Vec<_>>());

    [main, anti].into_iter().chain(rows).chain(cols)
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line with its owner, or `None` when no line is
/// complete. On a 1×1 board a filled cell is a win on its own.
#[instrument(skip(board), fields(size = board.size()))]
pub fn detect_winner(board: &Board) -> Option<Win> {
    winning_lines(board.size()).find_map(|line| {
        let player = line_owner(board, &line)?;
        Some(Win { player, line })
    })
}

/// Returns the player holding every cell of `line`, if there is one.
fn line_owner(board: &Board, line: &[usize]) -> Option<Player> {
    let (first, rest) = line.split_first()?;
    let player = board.get(*first)?.player()?;
    rest.iter()
        .all(|&cell| board.get(cell) == Some(Square::Occupied(player)))
        .then_some(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(size: usize, marks: &[(usize, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(size).unwrap(), |board, &(cell, player)| {
                board.with_mark(cell, player).unwrap()
            })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let win = detect_winner(&board).unwrap();
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.line(), &[0, 1, 2]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(3, &[(0, Player::O), (4, Player::O), (8, Player::O)]);
        let win = detect_winner(&board).unwrap();
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.line(), &[0, 4, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal_walks_top_right_first() {
        let board = board_with(3, &[(6, Player::X), (4, Player::X), (2, Player::X)]);
        assert_eq!(detect_winner(&board).unwrap().line(), &[2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(3, &[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_line_counts() {
        for size in 1..=6 {
            let lines = winning_lines(size).collect::<Vec<_>>();
            assert_eq!(lines.len(), 2 * size + 2);
            assert!(lines.iter().all(|line| line.len() == size));
            assert!(lines.iter().flatten().all(|&cell| cell < size * size));
        }
    }

    #[test]
    fn test_diagonal_beats_row() {
        // Top row and main diagonal both complete.
        let board = board_with(
            3,
            &[
                (0, Player::X),
                (1, Player::X),
                (2, Player::X),
                (4, Player::X),
                (8, Player::X),
            ],
        );
        assert_eq!(detect_winner(&board).unwrap().line(), &[0, 4, 8]);
    }

    #[test]
    fn test_row_beats_column() {
        let board = board_with(
            3,
            &[
                (3, Player::O),
                (4, Player::O),
                (5, Player::O),
                (2, Player::O),
                (8, Player::O),
            ],
        );
        assert_eq!(detect_winner(&board).unwrap().line(), &[3, 4, 5]);
    }

    #[test]
    fn test_single_cell_board() {
        let empty = Board::new(1).unwrap();
        assert_eq!(detect_winner(&empty), None);

        let board = board_with(1, &[(0, Player::X)]);
        let win = detect_winner(&board).unwrap();
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.line(), &[0]);
    }

    #[test]
    fn test_every_line_detected_on_larger_boards() {
        for size in 2..=5 {
            for line in winning_lines(size) {
                for player in Player::iter() {
                    let marks = line.iter().map(|&c| (c, player)).collect::<Vec<_>>();
                    let win = detect_winner(&board_with(size, &marks)).unwrap();
                    assert_eq!(win.player(), player);
                    assert_eq!(win.line(), line.as_slice());
                }
            }
        }
    }
}
