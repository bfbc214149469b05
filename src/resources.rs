//! Images and call-to-action text for each step.
//!
//! The state machine only knows step tags. A rendering layer resolves what to
//! show through a [`StepResources`] implementation; [`BundledResources`]
//! carries the stock English assets.

use crate::core::Step;

/// Title shown above the game.
pub const APP_TITLE: &str = "Lemonade";

/// Resolves the assets for a step.
pub trait StepResources {
    type Image;
    type Text;

    fn image_for(&self, step: Step) -> Self::Image;

    fn cta_text_for(&self, step: Step) -> Self::Text;
}

/// Reference to a drawable plus its content description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageResource {
    pub id: &'static str,
    pub description: &'static str,
}

/// Localizable string with its resource id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextResource {
    pub id: &'static str,
    pub text: &'static str,
}

/// Stock assets shipped with the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledResources;

impl StepResources for BundledResources {
    type Image = ImageResource;
    type Text = TextResource;

    fn image_for(&self, step: Step) -> ImageResource {
        let (id, description) = match step {
            Step::Tree => ("lemon_tree", "Lemon tree"),
            Step::Lemon => ("lemon_squeeze", "Lemon"),
            Step::Drink => ("lemon_drink", "Glass of lemonade"),
            Step::Done => ("lemon_restart", "Empty glass"),
        };
        ImageResource { id, description }
    }

    fn cta_text_for(&self, step: Step) -> TextResource {
        let (id, text) = match step {
            Step::Tree => ("tap_lemon_tree", "Tap the lemon tree to select a lemon"),
            Step::Lemon => ("squeeze_lemon", "Keep tapping the lemon to squeeze it"),
            Step::Drink => ("tap_to_drink", "Tap the lemonade to drink it"),
            Step::Done => ("tap_to_start_again", "Tap the empty glass to start again"),
        };
        TextResource { id, text }
    }
}
