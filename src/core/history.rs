//! State transition history tracking.
//!
//! Provides immutable tracking of taps over time, following functional
//! programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
///
/// Transitions are immutable values representing a move from one state
/// to another caused by one tap.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{StateTransition, Step};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Step::Tree,
///     to: Step::Lemon,
///     timestamp: Utc::now(),
///     tap: 1,
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// 1-based number of the tap that caused it
    pub tap: usize,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` methods return a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use lemonade::core::{StateHistory, StateTransition, Step};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Step::Tree,
///         to: Step::Lemon,
///         timestamp: Utc::now(),
///         tap: 1,
///     })
///     .record(StateTransition {
///         from: Step::Lemon,
///         to: Step::Drink,
///         timestamp: Utc::now(),
///         tap: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Step::Tree, &Step::Lemon, &Step::Drink]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition, keeping at most `limit` of the newest entries.
    ///
    /// ```rust
    /// use lemonade::core::{StateHistory, StateTransition, Step};
    /// use chrono::Utc;
    ///
    /// let mut history = StateHistory::new();
    /// for (tap, (from, to)) in [(Step::Tree, Step::Lemon), (Step::Lemon, Step::Drink)]
    ///     .into_iter()
    ///     .enumerate()
    /// {
    ///     history = history.record_bounded(
    ///         StateTransition { from, to, timestamp: Utc::now(), tap: tap + 1 },
    ///         1,
    ///     );
    /// }
    ///
    /// assert_eq!(history.transitions().len(), 1);
    /// assert_eq!(history.transitions()[0].tap, 2);
    /// ```
    pub fn record_bounded(&self, transition: StateTransition<S>, limit: usize) -> Self {
        let keep = limit.saturating_sub(1).min(self.transitions.len());
        let mut transitions = self.transitions[self.transitions.len() - keep..].to_vec();
        if limit > 0 {
            transitions.push(transition);
        }
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the oldest
    /// retained transition, then the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Step;

    fn transition(from: Step, to: Step, tap: usize) -> StateTransition<Step> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            tap,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Step> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(Step::Tree, Step::Lemon, 1));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(Step::Tree, Step::Lemon, 1))
            .record(transition(Step::Lemon, Step::Lemon, 2))
            .record(transition(Step::Lemon, Step::Drink, 3));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![&Step::Tree, &Step::Lemon, &Step::Lemon, &Step::Drink]
        );
    }

    #[test]
    fn record_bounded_drops_oldest() {
        let mut history = StateHistory::new();
        let steps = [
            (Step::Tree, Step::Lemon),
            (Step::Lemon, Step::Drink),
            (Step::Drink, Step::Done),
            (Step::Done, Step::Tree),
        ];
        for (i, (from, to)) in steps.into_iter().enumerate() {
            history = history.record_bounded(transition(from, to, i + 1), 2);
        }

        let taps: Vec<usize> = history.transitions().iter().map(|t| t.tap).collect();
        assert_eq!(taps, vec![3, 4]);
        assert_eq!(history.get_path(), vec![&Step::Drink, &Step::Done, &Step::Tree]);
    }

    #[test]
    fn record_bounded_with_zero_limit_keeps_nothing() {
        let history = StateHistory::new()
            .record(transition(Step::Tree, Step::Lemon, 1))
            .record_bounded(transition(Step::Lemon, Step::Drink, 2), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(transition(Step::Tree, Step::Lemon, 1));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition(Step::Lemon, Step::Drink, 2));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(Step::Drink, Step::Done, 1));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(Step::Tree, Step::Lemon, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Step> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].to, Step::Lemon);
    }
}
