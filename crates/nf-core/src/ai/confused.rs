use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};

use super::{Ai, Behavior, Decision, random_bump};
use crate::actor::Actor;
use crate::world::World;

/// Stumbles about for a number of turns, then goes back to what it was doing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confused {
    pub turns_remaining: u32,
    previous: Option<Box<Ai>>,
}

impl Confused {
    pub fn new(turns: u32, previous: Option<Ai>) -> Self {
        Self {
            turns_remaining: turns,
            previous: previous.map(Box::new),
        }
    }

    pub fn previous(&self) -> Option<&Ai> {
        self.previous.as_deref()
    }

    pub fn into_previous(self) -> Option<Ai> {
        self.previous.map(|b| *b)
    }
}

impl Behavior for Confused {
    fn decide<R: RandomSource>(&mut self, _me: &Actor, _world: &World, rng: &mut R) -> Decision {
        if self.turns_remaining == 0 {
            return Decision::restore();
        }
        self.turns_remaining -= 1;
        Decision::act(random_bump(rng, true))
    }
}
