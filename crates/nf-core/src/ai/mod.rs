//! Actor AI
//!
//! Each non-player actor carries one strategy. Each turn the engine takes
//! the strategy out of the actor, asks it for a [`Decision`] against a
//! read-only view of the world, puts it back (or the strategy it wraps,
//! for temporary ones) and then performs the chosen action.
//!
//! Temporary strategies (confusion, combat) own the strategy they replaced
//! and hand it back when they end, so an actor always returns to what it
//! was doing before.

mod confused;
mod hostile;
mod hunter;
mod routine;
mod wander;

use std::collections::VecDeque;

use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::DIRECTIONS;
use crate::action::Action;
use crate::actor::{Actor, ActorId};
use crate::world::{Position, World};

pub use confused::Confused;
pub use hostile::{Engagement, Hostile};
pub use hunter::Hunter;
pub use routine::Routine;
pub use wander::Wander;

/// What happens to the strategy after this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running this strategy
    Stay,
    /// Hand control back to the wrapped strategy
    Restore,
}

/// A strategy's choice for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub action: Action,
    pub transition: Transition,
}

impl Decision {
    pub fn act(action: Action) -> Self {
        Self {
            action,
            transition: Transition::Stay,
        }
    }

    pub fn wait() -> Self {
        Self::act(Action::Wait)
    }

    /// End this strategy without acting
    pub fn restore() -> Self {
        Self {
            action: Action::Wait,
            transition: Transition::Restore,
        }
    }
}

/// A way of choosing actions
pub trait Behavior {
    /// Choose this turn's action for `me`. `me` is the actor as it stands
    /// in `world`; its `ai` field is empty while this runs.
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, rng: &mut R) -> Decision;
}

/// Starting strategies a template can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum AiKind {
    Idle,
    Wander,
    Hostile,
    Routine,
    Hunter,
}

impl AiKind {
    pub fn instantiate(self) -> Ai {
        match self {
            AiKind::Idle => Ai::Idle,
            AiKind::Wander => Ai::Wander(Wander),
            AiKind::Hostile => Ai::Hostile(Hostile::default()),
            AiKind::Routine => Ai::Routine(Routine::default()),
            AiKind::Hunter => Ai::Hunter(Hunter::default()),
        }
    }
}

/// An actor's current strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
pub enum Ai {
    /// Never does anything
    Idle,
    Wander(Wander),
    Confused(Confused),
    Hostile(Hostile),
    Combat(Engagement),
    Routine(Routine),
    Hunter(Hunter),
}

impl Ai {
    /// Fight `target`, resuming `previous` afterwards
    pub fn engage(target: ActorId, previous: Option<Ai>) -> Ai {
        Ai::Combat(Engagement::new(target, previous))
    }

    /// Stumble around for `turns` turns, resuming `previous` afterwards
    pub fn confuse(turns: u32, previous: Option<Ai>) -> Ai {
        Ai::Confused(Confused::new(turns, previous))
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, Ai::Combat(_))
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Ai::Confused(_))
    }

    /// The strategy a temporary one will hand back to
    pub fn previous(&self) -> Option<&Ai> {
        match self {
            Ai::Confused(c) => c.previous(),
            Ai::Combat(e) => e.previous(),
            _ => None,
        }
    }

    /// End a temporary strategy. Idle if there is nothing to go back to;
    /// permanent strategies return themselves.
    pub fn restore_previous(self) -> Ai {
        match self {
            Ai::Confused(c) => c.into_previous().unwrap_or(Ai::Idle),
            Ai::Combat(e) => e.into_previous().unwrap_or(Ai::Idle),
            other => other,
        }
    }
}

impl Behavior for Ai {
    fn decide<R: RandomSource>(&mut self, me: &Actor, world: &World, rng: &mut R) -> Decision {
        match self {
            Ai::Idle => Decision::wait(),
            Ai::Wander(s) => s.decide(me, world, rng),
            Ai::Confused(s) => s.decide(me, world, rng),
            Ai::Hostile(s) => s.decide(me, world, rng),
            Ai::Combat(s) => s.decide(me, world, rng),
            Ai::Routine(s) => s.decide(me, world, rng),
            Ai::Hunter(s) => s.decide(me, world, rng),
        }
    }
}

/// Bump in a random direction
fn random_bump<R: RandomSource>(rng: &mut R, force_attack: bool) -> Action {
    let (dx, dy) = DIRECTIONS[rng.choose_index(DIRECTIONS.len())];
    Action::Bump {
        dx,
        dy,
        force_attack,
    }
}

/// Take the next step of a stored route. A route that no longer starts
/// next to the actor is dropped.
fn follow_path(path: &mut VecDeque<Position>, me: &Actor) -> Action {
    match path.pop_front() {
        Some(next) if me.pos.distance(next) == 1 => Action::Move {
            dx: next.x - me.pos.x,
            dy: next.y - me.pos.y,
        },
        Some(_) => {
            path.clear();
            Action::Wait
        }
        None => Action::Wait,
    }
}

/// Close in on `target`: melee when adjacent, otherwise step along a fresh route
fn pursue(path: &mut VecDeque<Position>, me: &Actor, target: Position, world: &World) -> Action {
    if me.distance_to(target) <= crate::MELEE_RANGE {
        let (dx, dy) = me.pos.step_towards(target);
        return Action::Melee { dx, dy };
    }
    *path = world.path_to(me.pos, target).into();
    follow_path(path, me)
}
