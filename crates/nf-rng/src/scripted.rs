//! Replaying random source for deterministic scenarios

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::RandomSource;

/// Returns a fixed sequence of draws.
///
/// Each draw is clamped to the bound requested by the caller. Once the
/// script runs out every draw is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedRng {
    draws: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Append more draws to the end of the script
    pub fn push(&mut self, draw: u32) {
        self.draws.push_back(draw);
    }

    /// Number of draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Number of draws handed out so far, including past the end of the script
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self, max: u32) -> u32 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(0).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut rng = ScriptedRng::new([15, 3, 7]);
        assert_eq!(rng.roll(20), 15);
        assert_eq!(rng.roll(20), 3);
        assert_eq!(rng.roll(20), 7);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_clamps_to_bound() {
        let mut rng = ScriptedRng::new([15]);
        assert_eq!(rng.roll(5), 5);
    }

    #[test]
    fn test_exhausted_returns_zero() {
        let mut rng = ScriptedRng::new([]);
        assert_eq!(rng.roll(100), 0);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_choose_index_uses_script() {
        let mut rng = ScriptedRng::new([2]);
        assert_eq!(rng.choose_index(4), 2);
        assert_eq!(rng.choose_index(0), 0);
    }
}
