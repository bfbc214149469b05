//! The mutable game state and its pure transition function.

use super::error::StateError;
use super::step::Step;
use serde::{Deserialize, Serialize};

/// Current position in the lemonade cycle.
///
/// The squeeze counter is only meaningful while the step is [`Step::Lemon`];
/// [`GameState::squeezes_remaining`] returns `None` everywhere else.
/// A lemon with no squeezes left is rejected on deserialization.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    step: Step,
    squeezes_remaining: u8,
}

impl GameState {
    /// Fresh state at the lemon tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// State in the middle of squeezing, with `remaining` taps to go.
    ///
    /// ```rust
    /// use lemonade::core::{GameState, StateError};
    ///
    /// assert_eq!(GameState::lemon(3).unwrap().squeezes_remaining(), Some(3));
    /// assert_eq!(GameState::lemon(0), Err(StateError::NoSqueezesLeft));
    /// ```
    pub fn lemon(remaining: u8) -> Result<Self, StateError> {
        if remaining == 0 {
            return Err(StateError::NoSqueezesLeft);
        }
        Ok(Self::squeezing(remaining))
    }

    /// Callers guarantee `remaining >= 1`.
    pub(crate) fn squeezing(remaining: u8) -> Self {
        debug_assert!(remaining >= 1);
        Self {
            step: Step::Lemon,
            squeezes_remaining: remaining,
        }
    }

    /// Current step of the cycle.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Taps left before the lemon turns into a drink.
    pub fn squeezes_remaining(&self) -> Option<u8> {
        match self.step {
            Step::Lemon => Some(self.squeezes_remaining),
            _ => None,
        }
    }

    /// Compute the state after one tap.
    ///
    /// Pure apart from `draw`, which is only invoked on the tree-to-lemon edge
    /// and yields the initial squeeze count. A draw of 0 counts as 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lemonade::core::{GameState, Step};
    ///
    /// let state = GameState::new().advance(|| 2);
    /// assert_eq!(state.step(), Step::Lemon);
    /// assert_eq!(state.squeezes_remaining(), Some(2));
    ///
    /// let state = state.advance(|| unreachable!()).advance(|| unreachable!());
    /// assert_eq!(state.step(), Step::Drink);
    /// ```
    pub fn advance<F>(self, draw: F) -> Self
    where
        F: FnOnce() -> u8,
    {
        match self.step {
            Step::Tree => Self::squeezing(draw().max(1)),
            Step::Lemon if self.squeezes_remaining > 1 => {
                Self::squeezing(self.squeezes_remaining - 1)
            }
            Step::Lemon => Self {
                step: Step::Drink,
                ..self
            },
            Step::Drink => Self {
                step: Step::Done,
                ..self
            },
            Step::Done => Self {
                step: Step::Tree,
                ..self
            },
        }
    }
}

/// Wire form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    step: Step,
    #[serde(default)]
    squeezes_remaining: u8,
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        match raw.step {
            Step::Lemon => Self::lemon(raw.squeezes_remaining),
            step => Ok(Self {
                step,
                squeezes_remaining: raw.squeezes_remaining,
            }),
        }
    }
}
