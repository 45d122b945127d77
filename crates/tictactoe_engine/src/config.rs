//! Game configuration loaded from TOML.

use crate::types::{EMPTY_SYMBOL, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a game session and its text rendering.
///
/// ```toml
/// first_player = "human"
/// computer_symbol = "X"
/// human_symbol = "O"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who moves first (`"mine"`/`"computer"` or `"opponent"`/`"human"`).
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Symbol drawn for the engine's marks.
    #[serde(default = "default_computer_symbol")]
    computer_symbol: char,

    /// Symbol drawn for the human's marks.
    #[serde(default = "default_human_symbol")]
    human_symbol: char,
}

fn default_first_player() -> Player {
    Player::Opponent
}

fn default_computer_symbol() -> char {
    Player::Mine.symbol()
}

fn default_human_symbol() -> char {
    Player::Opponent.symbol()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: default_first_player(),
            computer_symbol: default_computer_symbol(),
            human_symbol: default_human_symbol(),
        }
    }
}

impl GameConfig {
    /// Returns a copy with a different first player.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Symbol drawn for `player`'s marks.
    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::Mine => self.computer_symbol,
            Player::Opponent => self.human_symbol,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the two symbols can be told apart on a rendered board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer_symbol == self.human_symbol {
            return Err(ConfigError::new(format!(
                "Computer and human share the symbol {:?}",
                self.computer_symbol
            )));
        }
        for symbol in [self.computer_symbol, self.human_symbol] {
            if symbol == EMPTY_SYMBOL || symbol.is_whitespace() {
                return Err(ConfigError::new(format!(
                    "Symbol {:?} is reserved for empty squares",
                    symbol
                )));
            }
        }
        Ok(())
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
