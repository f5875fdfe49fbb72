//! Rewind - terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Settings**: TOML preferences with command-line overrides
//! - **Replay**: non-interactive text and JSON reports
//! - **TUI**: interactive board and move list
//!
//! All game logic lives in [`rewind_tictactoe`]; this crate only renders a
//! [`rewind_tictactoe::GameState`] and forwards user input to it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod replay;
pub mod settings;
pub mod tui;

pub use cli::{Cli, Command};
pub use replay::Report;
pub use settings::{DEFAULT_CONFIG, Settings, SettingsError};
pub use tui::{App, Focus};
