//! Lemonade: a tap-driven lemonade stand game core
//!
//! A player taps a single image to walk through four steps: pick a lemon
//! from the tree, squeeze it a random number of times, drink the lemonade,
//! and start again with the empty glass.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - **core**: `Step`, `GameState` and its pure transition function
//! - **machine**: the owned `GameStateMachine` with history and listeners
//! - **random**: injectable sources for the randomized squeeze count
//! - **resources**: images and call-to-action text per step
//!
//! # Example
//!
//! ```rust
//! use lemonade::core::Step;
//! use lemonade::machine::GameStateMachine;
//! use lemonade::random::ScriptedSqueezes;
//!
//! let mut machine = GameStateMachine::new(ScriptedSqueezes::always(2));
//!
//! let steps: Vec<Step> = (0..5).map(|_| machine.advance().step()).collect();
//! assert_eq!(
//!     steps,
//!     vec![Step::Lemon, Step::Lemon, Step::Drink, Step::Done, Step::Tree]
//! );
//! assert_eq!(machine.glasses_served(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod events;
pub mod logging;
pub mod machine;
pub mod random;
pub mod resources;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use config::{ConfigError, GameConfig, SqueezeRange};
pub use self::core::{GameState, State, StateError, StateHistory, StateTransition, Step};
pub use events::{StepChange, SubscriptionId};
pub use machine::GameStateMachine;
pub use random::{RandomSqueezes, ScriptedSqueezes, SqueezeSource};
pub use resources::{BundledResources, StepResources};
