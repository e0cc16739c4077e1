//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::Player;
use tracing::{debug, info, instrument};

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side played by the human (the AI takes the other).
    #[serde(default = "default_human")]
    human: Player,

    /// Print the minimax value of the position after each AI move.
    #[serde(default)]
    show_evaluation: bool,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

impl PlayConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(human: Player, show_evaluation: bool) -> Self {
        Self {
            human,
            show_evaluation,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, human: Option<Player>, show_evaluation: bool) -> Self {
        if let Some(human) = human {
            self.human = human;
        }
        self.show_evaluation |= show_evaluation;
        self
    }

    /// Side played by the AI.
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(default_human(), false)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
