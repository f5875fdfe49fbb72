//! Application state and key handling.

use super::input::{move_cursor, move_selection};
use crate::settings::Settings;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameError, GameState};
use tracing::{debug, info, instrument};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
///
/// All game logic lives in [`GameState`]; the app only tracks what the user
/// is pointing at.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: usize,
    selected: usize,
    focus: Focus,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a new game configured by `settings`.
    #[instrument(skip(settings), fields(size = settings.board_size()))]
    pub fn new(settings: &Settings) -> Result<Self, GameError> {
        let game = GameState::new(*settings.board_size())?;
        let game = if *settings.reversed() {
            game.toggle_reversed()
        } else {
            game
        };
        Ok(Self::with_game(game))
    }

    /// Wraps an existing game.
    pub fn with_game(game: GameState) -> Self {
        let size = game.size();
        let mut app = Self {
            cursor: (size / 2) * size + size / 2,
            game,
            selected: 0,
            focus: Focus::default(),
            message: None,
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Highlighted row of the move list, in presentation order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Feedback from the last key, such as a rejected move.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.message = None;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.sync_selection();
            }
            KeyCode::Char('r') => {
                self.game = self.game.toggle_reversed();
                self.sync_selection();
            }
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('[') | KeyCode::PageUp => {
                self.game = self.game.step_back();
                self.sync_selection();
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                self.game = self.game.step_forward();
                self.sync_selection();
            }
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.history().len() - 1),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            _ => self.cursor = move_cursor(self.cursor, self.game.size(), key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                let moves = self.game.move_list();
                if let Some(entry) = moves.get(self.selected) {
                    self.jump(entry.step);
                }
            }
            _ => {
                let len = self.game.history().len();
                self.selected = move_selection(self.selected, len, key);
            }
        }
    }

    /// Places the next player's marker under the cursor.
    fn place(&mut self) {
        match self.game.try_apply_move(self.cursor) {
            Ok(game) => {
                debug!(cell = self.cursor, "Move applied");
                self.game = game;
                self.sync_selection();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(game) => {
                self.game = game;
                self.sync_selection();
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Starts a new game with the same size and list order.
    fn restart(&mut self) {
        debug!("Restarting game");
        let reversed = self.game.is_reversed();
        if let Ok(game) = GameState::new(self.game.size()) {
            let game = if reversed {
                game.toggle_reversed()
            } else {
                game
            };
            *self = Self::with_game(game);
        }
    }

    /// Points the move-list selection at the active step.
    fn sync_selection(&mut self) {
        self.selected = self
            .game
            .move_list()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}
