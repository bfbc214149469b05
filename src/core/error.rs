//! Errors for constructing game states from outside the machine.

use thiserror::Error;

/// A game state that the transition table can never produce
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Lemon step needs at least one squeeze remaining")]
    NoSqueezesLeft,
}
