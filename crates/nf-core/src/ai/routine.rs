use std::collections::VecDeque;

use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};

use super::{Behavior, Decision, follow_path, random_bump};
use crate::action::Action;
use crate::actor::Actor;
use crate::world::{Phase, Position, World};

/// Daily routine: wander until nightfall, then walk home.
///
/// Actors without a home wander all night too. Wandering never attacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    path: VecDeque<Position>,
}

impl Routine {
    fn go_home(&mut self, me: &Actor, home: Position, world: &World) -> Action {
        if me.pos == home {
            self.path.clear();
            return Action::Wait;
        }
        self.path = world.path_to(me.pos, home).into();
        follow_path(&mut self.path, me)
    }
}

impl Behavior for Routine {
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, rng: &mut R) -> Decision {
        if world.time.phase() < Phase::Nighttime {
            return Decision::act(random_bump(rng, false));
        }
        match world.dwelling_of(me) {
            Some(home) => Decision::act(self.go_home(me, home, world)),
            None => Decision::act(random_bump(rng, false)),
        }
    }
}
