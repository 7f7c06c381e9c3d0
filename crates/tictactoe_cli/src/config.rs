//! Game configuration loaded from TOML.

use crate::view::MarkLabels;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Character drawn for the human's mark.
    #[serde(default = "default_player_label")]
    player_label: char,

    /// Character drawn for the computer's mark.
    #[serde(default = "default_opponent_label")]
    opponent_label: char,

    /// Seed for the opponent's random choices. Unset means OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// File receiving the log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_label() -> char {
    'X'
}

fn default_opponent_label() -> char {
    'O'
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_label: default_player_label(),
            opponent_label: default_opponent_label(),
            seed: None,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks that the two labels can be told apart on screen.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for label in [self.player_label, self.opponent_label] {
            if label == '.' || label.is_whitespace() || label.is_control() {
                return Err(ConfigError::new(format!(
                    "Label {:?} cannot be drawn as a mark",
                    label
                )));
            }
        }
        if self.player_label == self.opponent_label {
            return Err(ConfigError::new(format!(
                "Player and opponent share the label {:?}",
                self.player_label
            )));
        }
        Ok(())
    }

    /// Mark labels for the renderer.
    pub fn labels(&self) -> MarkLabels {
        MarkLabels::new(self.player_label, self.opponent_label)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.labels(), MarkLabels::new('X', 'O'));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = GameConfig::from_toml("seed = 7\nplayer_label = \"@\"").unwrap();
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.player_label(), '@');
        assert_eq!(*config.opponent_label(), 'O');
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_same_labels_rejected() {
        let err = GameConfig::from_toml("player_label = \"O\"").unwrap_err();
        assert!(err.message.contains("share"));
    }

    #[test]
    fn test_dot_label_rejected() {
        assert!(GameConfig::from_toml("opponent_label = \".\"").is_err());
    }

    #[test]
    fn test_multi_char_label_is_parse_error() {
        let err = GameConfig::from_toml("player_label = \"XX\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_seed(Some(3))
            .with_log_file(PathBuf::from("game.log"));
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }
}
