//! Sources for the randomized squeeze count.
//!
//! The machine never touches an RNG directly. It asks a [`SqueezeSource`]
//! for a value whenever a lemon is picked, so tests can script the draws.

use crate::config::SqueezeRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Capability that yields the initial squeeze count.
///
/// Implementations should return a value inside `range`. The machine clamps
/// anything outside it.
pub trait SqueezeSource {
    fn draw(&mut self, range: SqueezeRange) -> u8;
}

impl<F> SqueezeSource for F
where
    F: FnMut(SqueezeRange) -> u8,
{
    fn draw(&mut self, range: SqueezeRange) -> u8 {
        self(range)
    }
}

/// Uniform draws from a standard RNG.
///
/// Seeded for reproducible sessions, or from entropy for real play.
pub struct RandomSqueezes {
    rng: StdRng,
}

impl RandomSqueezes {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl SqueezeSource for RandomSqueezes {
    fn draw(&mut self, range: SqueezeRange) -> u8 {
        self.rng.gen_range(range.as_range())
    }
}

/// Deterministic draws that replay a fixed sequence, cycling when exhausted.
///
/// An empty script always yields the range minimum.
///
/// ```rust
/// use lemonade::config::SqueezeRange;
/// use lemonade::random::{ScriptedSqueezes, SqueezeSource};
///
/// let mut source = ScriptedSqueezes::new([2, 4]);
/// let range = SqueezeRange::default();
/// assert_eq!(source.draw(range), 2);
/// assert_eq!(source.draw(range), 4);
/// assert_eq!(source.draw(range), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSqueezes {
    values: Vec<u8>,
    next: usize,
}

impl ScriptedSqueezes {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// Always draw the same value.
    pub fn always(value: u8) -> Self {
        Self::new([value])
    }

    /// How many values have been drawn so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl SqueezeSource for ScriptedSqueezes {
    fn draw(&mut self, range: SqueezeRange) -> u8 {
        if self.values.is_empty() {
            return range.min();
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
