//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - The `Step` tags and the `State` trait they implement
//! - `GameState` and its transition function
//! - Immutable history tracking
//!
//! Nothing in here performs I/O or draws random numbers itself; the
//! [`GameStateMachine`](crate::machine::GameStateMachine) supplies those.

mod error;
mod game_state;
mod history;
mod state;
mod step;

pub use error::StateError;
pub use game_state::GameState;
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use step::Step;
