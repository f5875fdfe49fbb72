//! Non-interactive replay: play a list of cells and report the result.

use crate::settings::Settings;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameState, MoveDescription, Square};
use serde::Serialize;
use tracing::{info, instrument};

/// Plays `cells` on a board sized by `settings` and reports the game.
///
/// The move list order comes from `settings`. When `step` is given the
/// cursor is moved there before reporting.
#[instrument(skip(settings, cells), fields(moves = cells.len()))]
pub fn run(settings: &Settings, step: Option<usize>, cells: &[usize]) -> Result<Report> {
    let game = GameState::replay(*settings.board_size(), cells).context("Failed to start game")?;
    let game = if *settings.reversed() {
        game.toggle_reversed()
    } else {
        game
    };
    let game = match step {
        Some(step) => game.jump_to(step).context("Failed to jump")?,
        None => game,
    };
    info!(status = %game.status(), "Replay finished");

    Ok(Report::new(&game))
}

/// Everything a presentation needs from a game, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Board size.
    pub size: usize,
    /// Cells in row-major order: `"X"`, `"O"` or `""`.
    pub cells: Vec<String>,
    /// Status line.
    pub status: String,
    /// Winning line of the active snapshot.
    pub winning_line: Option<Vec<usize>>,
    /// Active history index.
    pub current_step: usize,
    /// Move list newest first.
    pub reversed: bool,
    /// Move list in presentation order.
    pub moves: Vec<MoveDescription>,
    /// Board drawn as a text grid.
    #[serde(skip)]
    pub grid: String,
}

impl Report {
    /// Builds a report for the snapshot at the game's cursor.
    #[instrument(skip(game), fields(step = game.current_step()))]
    pub fn new(game: &GameState) -> Self {
        let board = game.current().board();
        Self {
            size: board.size(),
            cells: board
                .squares()
                .iter()
                .map(|square| match square {
                    Square::Empty => String::new(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect(),
            status: game.status().to_string(),
            winning_line: game.winning_line().map(<[usize]>::to_vec),
            current_step: game.current_step(),
            reversed: game.is_reversed(),
            moves: game.move_list(),
            grid: board.to_string(),
        }
    }

    /// Renders the report as human-readable text.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.grid, self.status);
        for entry in &self.moves {
            let marker = if entry.is_current { ">" } else { " " };
            out.push_str(&format!("{marker} {}. {}\n", entry.step, entry.label));
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_of_won_game() {
        let game = GameState::replay(3, &[0, 1, 4, 2, 8]).unwrap();
        let report = Report::new(&game);
        assert_eq!(report.status, "Winner: X");
        assert_eq!(report.winning_line, Some(vec![0, 4, 8]));
        assert_eq!(report.cells[1], "O");
        assert_eq!(report.cells[3], "");
        assert_eq!(report.moves.len(), 6);
    }

    #[test]
    fn test_text_marks_current_step() {
        let game = GameState::replay(3, &[4]).unwrap().jump_to(0).unwrap();
        let text = Report::new(&game).to_text();
        assert!(text.contains("> 0. Go to game start"));
        assert!(text.contains("  1. Go to move #1 (1,1)"));
        assert!(text.contains("Next player: X"));
        assert!(text.starts_with(".|.|.\n-+-+-\n.|.|."));
    }

    #[test]
    fn test_run_applies_settings() {
        let settings = Settings::default().with_overrides(Some(4), Some(true));
        let report = run(&settings, Some(1), &[5, 6]).unwrap();
        assert_eq!(report.size, 4);
        assert!(report.reversed);
        assert_eq!(report.current_step, 1);
        assert_eq!(report.cells[5], "X");
        assert_eq!(report.cells[6], "");
    }

    #[test]
    fn test_json_fields() {
        let game = GameState::replay(3, &[4]).unwrap().toggle_reversed();
        let json = Report::new(&game).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reversed"], true);
        assert_eq!(value["moves"][0]["step"], 1);
        assert_eq!(value["winning_line"], serde_json::Value::Null);
    }
}
