use std::collections::VecDeque;

use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};

use super::{Ai, Behavior, Decision, follow_path, pursue};
use crate::actor::{Actor, ActorId};
use crate::world::{Position, World};

/// Hunts the player: melee when adjacent, re-plan whenever the player's
/// view covers this actor, otherwise keep walking the last route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostile {
    path: VecDeque<Position>,
}

impl Behavior for Hostile {
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, _rng: &mut R) -> Decision {
        let Some(player) = world.player().filter(|p| p.is_alive()) else {
            return Decision::wait();
        };

        if me.distance_to(player.pos) <= crate::MELEE_RANGE || world.map.is_visible(me.pos) {
            return Decision::act(pursue(&mut self.path, me, player.pos, world));
        }
        Decision::act(follow_path(&mut self.path, me))
    }
}

/// Fights one opponent until it dies, then hands back to the previous strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    pub target: ActorId,
    path: VecDeque<Position>,
    previous: Option<Box<Ai>>,
}

impl Engagement {
    pub fn new(target: ActorId, previous: Option<Ai>) -> Self {
        Self {
            target,
            path: VecDeque::new(),
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

impl Behavior for Engagement {
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, _rng: &mut R) -> Decision {
        match world.actors.get(self.target).filter(|t| t.is_alive()) {
            Some(target) => Decision::act(pursue(&mut self.path, me, target.pos, world)),
            None => Decision::wait(),
        }
    }
}
