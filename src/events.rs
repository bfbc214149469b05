//! Change notifications for rendering layers.
//!
//! A [`GameStateMachine`](crate::machine::GameStateMachine) announces every
//! tap to its listeners so a UI can re-render without polling. Delivery is
//! synchronous, on the thread that called `advance()`, in subscription order.

use crate::core::{GameState, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Emitted after each tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepChange {
    /// 1-based tap counter for the session
    pub tap: usize,
    pub from: GameState,
    pub to: GameState,
    pub at: DateTime<Utc>,
}

impl StepChange {
    /// Whether this tap finished a glass and returned to the tree.
    pub fn served_glass(&self) -> bool {
        self.from.step() == Step::Done && self.to.step() == Step::Tree
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Callback invoked with each change.
pub type Listener = Box<dyn FnMut(&StepChange)>;

/// Ordered set of listeners.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StepChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &StepChange) {
        for (_, listener) in &mut self.entries {
            listener(change);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
