//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`GameConfig`](super::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The squeeze range is empty or allows zero squeezes
    #[error("Invalid squeeze range {min}..={max}: need 1 <= min <= max")]
    InvalidSqueezeRange { min: u8, max: u8 },

    /// History must retain at least one transition
    #[error("History limit must be at least 1")]
    InvalidHistoryLimit,
}
