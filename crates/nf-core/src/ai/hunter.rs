use std::collections::VecDeque;

use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};

use super::{Behavior, Decision, Routine, follow_path};
use crate::action::Action;
use crate::actor::{Actor, ActorId};
use crate::world::{Position, World};

/// Picks a victim among the living non-players, stalks and attacks it.
///
/// After making a kill it lies low for a few days, following an ordinary
/// routine, before choosing the next victim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunter {
    routine: Routine,
    pub target: Option<ActorId>,
    /// Kill count when the current target was chosen
    kills_at_pick: u32,
    /// Day on which the hunt resumes
    pub resting_until: Option<u64>,
    path: VecDeque<Position>,
}

impl Hunter {
    pub fn is_resting(&self, world: &World) -> bool {
        self.resting_until.is_some_and(|day| world.time.day() < day)
    }

    /// Drop a target that has died, resting if the kill was ours
    fn check_target(&mut self, me: &Actor, world: &World) {
        let Some(target) = self.target else {
            return;
        };
        if world.actors.is_alive(target) {
            return;
        }
        self.target = None;
        self.path.clear();
        if me.deeds.kills > self.kills_at_pick {
            let until = world.time.day() + u64::from(world.config.hunter.cooldown_days);
            tracing::debug!(hunter = %me.name, until, "kill made, lying low");
            self.resting_until = Some(until);
        }
    }

    fn pick_victim<R: RandomSource>(&mut self, me: &Actor, world: &World, rng: &mut R) -> Option<ActorId> {
        let victims: Vec<ActorId> = world
            .actors
            .living()
            .filter(|a| a.id != me.id && !a.is_player && !me.friends.contains(&a.id))
            .map(|a| a.id)
            .collect();
        let victim = *rng.choose(&victims)?;
        tracing::info!(hunter = %me.name, ?victim, "choosing victim");
        self.target = Some(victim);
        self.kills_at_pick = me.deeds.kills;
        Some(victim)
    }
}

impl Behavior for Hunter {
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, rng: &mut R) -> Decision {
        self.check_target(me, world);
        if self.is_resting(world) {
            return self.routine.decide(me, world, rng);
        }
        self.resting_until = None;

        let victim = match self.target {
            Some(victim) => victim,
            None => match self.pick_victim(me, world, rng) {
                Some(victim) => victim,
                None => return self.routine.decide(me, world, rng),
            },
        };
        let Some(pos) = world.actors.get(victim).map(|v| v.pos) else {
            self.target = None;
            return Decision::wait();
        };

        if me.distance_to(pos) <= crate::MELEE_RANGE {
            return Decision::act(Action::Attack { target: victim });
        }
        self.path = world.path_to(me.pos, pos).into();
        Decision::act(follow_path(&mut self.path, me))
    }
}
