//! User settings loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "rewind.toml";

/// Game and logging preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows and columns of a new board.
    board_size: usize,

    /// Present the move list newest first.
    reversed: bool,

    /// File the TUI writes logs to.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: 3,
            reversed: false,
            log_file: PathBuf::from("rewind.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses settings from TOML text. Missing keys keep their defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(board_size = settings.board_size, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` when given, else [`DEFAULT_CONFIG`] if it exists, else
    /// the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::from_file(DEFAULT_CONFIG),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides. `None` keeps the loaded value.
    pub fn with_overrides(self, board_size: Option<usize>, reversed: Option<bool>) -> Self {
        Self {
            board_size: board_size.unwrap_or(self.board_size),
            reversed: reversed.unwrap_or(self.reversed),
            ..self
        }
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
