//! The four phases of the lemonade cycle.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four mutually exclusive phases of the game.
///
/// A step stores only its tag. Images and call-to-action text are looked up
/// by a [`StepResources`](crate::resources::StepResources) collaborator.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// A lemon tree waiting to be picked.
    #[default]
    Tree,
    /// A lemon being squeezed.
    Lemon,
    /// A full glass of lemonade.
    Drink,
    /// An empty glass.
    Done,
}

impl Step {
    /// Every step, in cycle order.
    pub const ALL: [Step; 4] = [Step::Tree, Step::Lemon, Step::Drink, Step::Done];
}

impl State for Step {
    fn name(&self) -> &str {
        match self {
            Self::Tree => "Tree",
            Self::Lemon => "Lemon",
            Self::Drink => "Drink",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
