//! Game configuration.
//!
//! Configuration is optional: every field has a default matching the
//! classic game (two to four squeezes per lemon). A TOML file can override
//! any subset of it.
//!
//! ```toml
//! history_limit = 64
//!
//! [squeezes]
//! min = 2
//! max = 4
//! ```

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

pub mod error;

pub use error::ConfigError;

/// Default number of transitions kept in a machine's history
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Inclusive range the initial squeeze count is drawn from.
///
/// Ranges built with [`SqueezeRange::new`] are validated. A deserialized range
/// is only checked by [`GameConfig::validate`], so the accessors treat an
/// inverted range as the single value `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqueezeRange {
    min: u8,
    max: u8,
}

impl Default for SqueezeRange {
    fn default() -> Self {
        Self { min: 2, max: 4 }
    }
}

impl SqueezeRange {
    /// Create a validated range.
    pub fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidSqueezeRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Smallest squeeze count that can be drawn.
    pub fn min(&self) -> u8 {
        self.min
    }

    /// Largest squeeze count that can be drawn, never below `min`.
    pub fn max(&self) -> u8 {
        self.max.max(self.min)
    }

    pub fn contains(&self, value: u8) -> bool {
        self.as_range().contains(&value)
    }

    /// Force `value` into the range.
    pub fn clamp(&self, value: u8) -> u8 {
        value.clamp(self.min(), self.max())
    }

    /// Never empty.
    pub fn as_range(&self) -> RangeInclusive<u8> {
        self.min()..=self.max()
    }
}

/// Top-level game configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub squeezes: SqueezeRange,
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            squeezes: SqueezeRange::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GameConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.squeezes.validate()?;
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        Ok(())
    }
}
