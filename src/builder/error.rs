//! Build errors for the game builder.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a game state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
