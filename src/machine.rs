//! The owned, observable game state machine.
//!
//! [`GameStateMachine`] is the imperative shell around
//! [`GameState::advance`]: it owns the squeeze source, records history,
//! counts taps and notifies listeners.

use crate::config::{GameConfig, SqueezeRange};
use crate::core::{GameState, StateHistory, StateTransition, Step};
use crate::events::{Listeners, StepChange, SubscriptionId};
use crate::random::{RandomSqueezes, SqueezeSource};
use chrono::Utc;
use tracing::{debug, info, warn};

/// Game state machine for one screen session.
///
/// # Example
///
/// ```rust
/// use lemonade::core::Step;
/// use lemonade::machine::GameStateMachine;
/// use lemonade::random::ScriptedSqueezes;
///
/// let mut machine = GameStateMachine::new(ScriptedSqueezes::always(2));
/// assert_eq!(machine.current_step(), Step::Tree);
///
/// machine.advance();
/// assert_eq!(machine.squeezes_remaining(), Some(2));
/// ```
pub struct GameStateMachine {
    current: GameState,
    source: Box<dyn SqueezeSource>,
    squeezes: SqueezeRange,
    history: StateHistory<Step>,
    history_limit: usize,
    listeners: Listeners,
    taps: usize,
    glasses_served: usize,
}

impl GameStateMachine {
    /// Create a machine at the tree with the default configuration.
    pub fn new(source: impl SqueezeSource + 'static) -> Self {
        Self::from_parts(GameConfig::default(), Box::new(source))
    }

    /// Create a machine using entropy-seeded randomness.
    pub fn with_random() -> Self {
        Self::new(RandomSqueezes::from_entropy())
    }

    /// Assemble a machine from an already validated configuration.
    pub(crate) fn from_parts(config: GameConfig, source: Box<dyn SqueezeSource>) -> Self {
        Self {
            current: GameState::new(),
            source,
            squeezes: config.squeezes,
            history: StateHistory::new(),
            history_limit: config.history_limit,
            listeners: Listeners::new(),
            taps: 0,
            glasses_served: 0,
        }
    }

    /// Current step (pure)
    pub fn current_step(&self) -> Step {
        self.current.step()
    }

    /// Full current state (pure)
    pub fn state(&self) -> GameState {
        self.current
    }

    /// Squeezes left, only while squeezing (pure)
    pub fn squeezes_remaining(&self) -> Option<u8> {
        self.current.squeezes_remaining()
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &StateHistory<Step> {
        &self.history
    }

    /// Number of taps handled so far
    pub fn taps(&self) -> usize {
        self.taps
    }

    /// Number of completed cycles
    pub fn glasses_served(&self) -> usize {
        self.glasses_served
    }

    /// Range the squeeze count is drawn from
    pub fn squeeze_range(&self) -> SqueezeRange {
        self.squeezes
    }

    /// Handle one tap and return the new state.
    ///
    /// Every call counts as a separate tap; there is no debounce.
    pub fn advance(&mut self) -> GameState {
        let from = self.current;
        let range = self.squeezes;
        let source = &mut self.source;
        let to = from.advance(|| {
            let drawn = source.draw(range);
            if range.contains(drawn) {
                drawn
            } else {
                let clamped = range.clamp(drawn);
                warn!(
                    drawn,
                    clamped,
                    min = range.min(),
                    max = range.max(),
                    "squeeze draw out of range"
                );
                clamped
            }
        });

        self.taps += 1;
        self.current = to;

        let now = Utc::now();
        self.history = self.history.record_bounded(
            StateTransition {
                from: from.step(),
                to: to.step(),
                timestamp: now,
                tap: self.taps,
            },
            self.history_limit,
        );

        let change = StepChange {
            tap: self.taps,
            from,
            to,
            at: now,
        };

        debug!(
            tap = self.taps,
            from = %from.step(),
            to = %to.step(),
            squeezes_remaining = ?to.squeezes_remaining(),
            "advanced"
        );

        if change.served_glass() {
            self.glasses_served += 1;
            info!(glasses_served = self.glasses_served, "glass served");
        }

        self.listeners.notify(&change);
        to
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StepChange) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl std::fmt::Debug for GameStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStateMachine")
            .field("current", &self.current)
            .field("squeezes", &self.squeezes)
            .field("taps", &self.taps)
            .field("glasses_served", &self.glasses_served)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
