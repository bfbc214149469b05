//! Core State trait for game states.
//!
//! Anything recorded in the transition history implements this trait, which
//! provides pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are small immutable
/// values describing the current position in the game cycle.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for transition logic
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be serializable for change events
///
/// # Example
///
/// ```rust
/// use lemonade::core::{State, Step};
///
/// assert_eq!(Step::Tree.name(), "Tree");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
