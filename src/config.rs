//! Game configuration loaded from TOML.

use crate::words::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hangman::{DEFAULT_ATTEMPT_BUDGET, MAX_ATTEMPT_BUDGET};
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "hangman.toml";

/// Settings for a game launch.
///
/// Every field is optional in the file; command-line flags override
/// whatever the file says.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Wrong guesses allowed per round, from 1 to 27.
    #[serde(default = "default_attempt_budget")]
    attempt_budget: u32,

    /// Word-list file. Built-in lists are used when unset.
    #[serde(default)]
    words_file: Option<PathBuf>,

    /// Seed for word selection. A random seed is used when unset.
    #[serde(default)]
    seed: Option<u64>,

    /// Tier to play without asking the player.
    #[serde(default)]
    difficulty: Option<Difficulty>,
}

fn default_attempt_budget() -> u32 {
    DEFAULT_ATTEMPT_BUDGET
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            attempt_budget: default_attempt_budget(),
            words_file: None,
            seed: None,
            difficulty: None,
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, cannot be parsed, or sets an
    /// attempt budget outside `1..=27`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(attempt_budget = config.attempt_budget, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed TOML or an attempt budget outside `1..=27`.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Fails only if an existing file is invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[must_use]
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        words_file: Option<PathBuf>,
        seed: Option<u64>,
        difficulty: Option<Difficulty>,
    ) -> Self {
        if words_file.is_some() {
            self.words_file = words_file;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATTEMPT_BUDGET).contains(&self.attempt_budget) {
            return Err(ConfigError::new(format!(
                "attempt_budget must be between 1 and {}, got {}",
                MAX_ATTEMPT_BUDGET, self.attempt_budget
            )));
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
    fn test_defaults() {
        let config = HangmanConfig::default();
        assert_eq!(*config.attempt_budget(), 10);
        assert!(config.words_file().is_none());
        assert!(config.seed().is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(HangmanConfig::from_toml("").unwrap(), HangmanConfig::default());
    }

    #[test]
    fn test_overrides_keep_unset_values() {
        let config = HangmanConfig::from_toml("seed = 4\ndifficulty = \"hard\"").unwrap();
        let config = config.with_overrides(None, None, Some(Difficulty::Easy));
        assert_eq!(*config.seed(), Some(4));
        assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
    }
}
