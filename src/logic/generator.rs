//! Opponent choice: uniform random draw over the three signs, with an injectable source.

use crate::models::Sign;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of opponent signs.
pub trait ChoiceGenerator {
    /// Draw the next opponent sign.
    fn draw(&mut self) -> Sign;
}

/// Uniform random generator over any `rand` RNG.
#[derive(Clone, Debug)]
pub struct RandomGenerator<R = StdRng> {
    rng: R,
}

impl RandomGenerator<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible generator (same seed, same sequence of draws).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ChoiceGenerator for RandomGenerator<R> {
    fn draw(&mut self) -> Sign {
        Sign::ALL[self.rng.gen_range(0..Sign::ALL.len())]
    }
}

/// Replays a fixed sequence of signs, starting over when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedGenerator {
    signs: Vec<Sign>,
    next: usize,
}

impl ScriptedGenerator {
    /// An empty script falls back to always drawing rock.
    pub fn new(signs: impl Into<Vec<Sign>>) -> Self {
        Self {
            signs: signs.into(),
            next: 0,
        }
    }

    /// Always draws `sign`.
    pub fn always(sign: Sign) -> Self {
        Self::new(vec![sign])
    }
}

impl ChoiceGenerator for ScriptedGenerator {
    fn draw(&mut self) -> Sign {
        let Some(&sign) = self.signs.get(self.next) else {
            return Sign::Rock;
        };
        self.next = (self.next + 1) % self.signs.len();
        sign
    }
}
