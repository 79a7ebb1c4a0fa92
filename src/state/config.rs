//! Game configuration.
//!
//! Everything here is presentation or feel. Scoring rules and level
//! targets are fixed and live next to the code that applies them.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::die::DEFAULT_SIDES;
use super::layout::LayoutConfig;

/// Largest supported side count.
pub const MAX_DIE_SIDES: u32 = 1000;

/// Configuration injected into [`GameState`](super::game::GameState).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Sides on every die
    pub die_sides: u32,

    /// Length of the roll animation in milliseconds
    pub roll_duration_ms: u64,

    pub layout: LayoutConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            die_sides: DEFAULT_SIDES,
            roll_duration_ms: 1000,
            layout: LayoutConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn roll_duration(&self) -> Duration {
        Duration::from_millis(self.roll_duration_ms)
    }

    /// Reject values the game cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.die_sides == 0 {
            return Err(ConfigError::Invalid("die_sides must be at least 1"));
        }
        if self.die_sides > MAX_DIE_SIDES {
            return Err(ConfigError::Invalid("die_sides is too large"));
        }
        let l = &self.layout;
        if l.canvas_width <= 0.0 || l.canvas_height <= 0.0 {
            return Err(ConfigError::Invalid("canvas dimensions must be positive"));
        }
        if l.die_size <= 0.0 || l.button_width <= 0.0 || l.button_height <= 0.0 {
            return Err(ConfigError::Invalid("widget sizes must be positive"));
        }
        Ok(())
    }

    /// Load and validate a JSON config file. Missing keys take defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&text).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config, {} unusable: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Config errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read config: {}", e),
            Self::Parse(e) => write!(f, "Failed to parse config: {}", e),
            Self::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}
