//! Builder for constructing game state machines.

use crate::builder::error::BuildError;
use crate::config::{GameConfig, SqueezeRange};
use crate::machine::GameStateMachine;
use crate::random::{RandomSqueezes, SqueezeSource};

/// Builder for constructing game state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use lemonade::builder::GameBuilder;
/// use lemonade::core::Step;
///
/// let mut machine = GameBuilder::new()
///     .squeezes(3, 3)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// machine.advance();
/// assert_eq!(machine.current_step(), Step::Lemon);
/// assert_eq!(machine.squeezes_remaining(), Some(3));
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    squeezes: Option<(u8, u8)>,
    source: Option<Box<dyn SqueezeSource>>,
    seed: Option<u64>,
}

impl GameBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the inclusive squeeze range (validated on build).
    /// Overrides the range from `config`.
    pub fn squeezes(mut self, min: u8, max: u8) -> Self {
        self.squeezes = Some((min, max));
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Use a custom squeeze source. Takes precedence over `seed`.
    pub fn source(mut self, source: impl SqueezeSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Seed the default random source for a reproducible session.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the state machine.
    /// Returns an error if the configuration is invalid.
    pub fn build(mut self) -> Result<GameStateMachine, BuildError> {
        if let Some((min, max)) = self.squeezes {
            self.config.squeezes = SqueezeRange::new(min, max)?;
        }
        self.config.validate()?;

        let source = match self.source {
            Some(source) => source,
            None => Box::new(RandomSqueezes::new(self.seed)),
        };

        Ok(GameStateMachine::from_parts(self.config, source))
    }
}
