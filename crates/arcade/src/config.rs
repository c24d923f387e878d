//! Arcade configuration.

use arcade_core::Difficulty;
use arcade_tictactoe::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// Environment variable that overrides the configured seed.
pub const SEED_ENV: &str = "ARCADE_SEED";

/// Settings shared by every game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Name shown in the prompt and by `whoami`.
    #[serde(default = "default_username")]
    username: String,

    /// Starting tier for the computer opponents.
    #[serde(default)]
    difficulty: Difficulty,

    /// Starting tic-tac-toe mode.
    #[serde(default)]
    mode: GameMode,

    /// Fixed RNG seed for reproducible opponents.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_username() -> String {
    "user".to_string()
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            difficulty: Difficulty::default(),
            mode: GameMode::default(),
            seed: None,
        }
    }
}

impl ArcadeConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(username = %config.username, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies a raw `ARCADE_SEED` value, if one was set.
    #[instrument(skip(self))]
    pub fn with_seed_env(self, raw: Option<String>) -> Result<Self, ConfigError> {
        match raw {
            Some(raw) => {
                let seed = raw.trim().parse::<u64>().map_err(|e| {
                    ConfigError::new(format!("{} must be an unsigned integer: {}", SEED_ENV, e))
                })?;
                debug!(seed, "Seed taken from environment");
                Ok(self.with_seed(Some(seed)))
            }
            None => Ok(self),
        }
    }

    /// Replaces the seed when `seed` is set.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the starting difficulty when one is given.
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        self
    }

    /// Replaces the starting mode when one is given.
    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        self
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
        error!(error_message = %message, "Config error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
