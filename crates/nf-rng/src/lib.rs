//! Random sources for the Nightfall simulation
//!
//! Every random decision in the core goes through [`RandomSource`], so the
//! same code runs against the seeded [`GameRng`] in play and against a
//! [`ScriptedRng`] replaying fixed draws in tests.

mod scripted;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub use scripted::ScriptedRng;

/// A source of uniform random integers.
pub trait RandomSource {
    /// Uniform integer in `0..=max`.
    fn roll(&mut self, max: u32) -> u32;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.roll(len as u32 - 1) as usize
    }

    /// Choose a random element from a slice
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.choose_index(items.len())])
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, max: u32) -> u32 {
        (**self).roll(max)
    }
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Serialized as the seed plus the position in the stream, so a restored
/// game continues with the same draws.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

#[derive(Serialize, Deserialize)]
struct SavedRng {
    seed: u64,
    #[serde(default)]
    word_pos: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SavedRng {
            seed: self.seed,
            word_pos: u64::try_from(self.rng.get_word_pos()).unwrap_or(u64::MAX),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let saved = SavedRng::deserialize(deserializer)?;
        let mut rng = GameRng::new(saved.seed);
        rng.rng.set_word_pos(u128::from(saved.word_pos));
        Ok(rng)
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

}

impl RandomSource for GameRng {
    fn roll(&mut self, max: u32) -> u32 {
        self.rng.gen_range(0..=max)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
