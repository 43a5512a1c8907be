//! Actions
//!
//! Everything an actor can do in a turn. The player's input and the AI's
//! decisions both end up here. An action either happens (possibly with no
//! visible effect) or fails with [`Impossible`], in which case nothing in
//! the world has changed.

mod item;
mod melee;
mod movement;

use nf_rng::RandomSource;

use crate::actor::ActorId;
use crate::error::Impossible;
use crate::gameloop::MessageLog;
use crate::object::ItemId;
use crate::world::World;

pub use melee::describe_outcome;

/// One turn's worth of doing something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Let the turn pass
    Wait,
    /// Step to an adjacent tile
    Move { dx: i32, dy: i32 },
    /// Attack whoever stands on an adjacent tile
    Melee { dx: i32, dy: i32 },
    /// Move, unless someone is in the way. With `force_attack` the one in
    /// the way is attacked; without it the turn passes.
    Bump {
        dx: i32,
        dy: i32,
        force_attack: bool,
    },
    /// Attack a specific actor
    Attack { target: ActorId },
    /// Pick up the top item underfoot
    Pickup,
    /// Put a carried item on the floor
    Drop { item: ItemId },
    /// Equip a carried item, or unequip a worn or held one
    ToggleEquip { item: ItemId },
    /// Consume an item, optionally on another actor
    Use {
        item: ItemId,
        target: Option<ActorId>,
    },
}

impl Action {
    /// Carry out this action for `actor`
    pub fn perform<R: RandomSource>(
        self,
        actor: ActorId,
        world: &mut World,
        rng: &mut R,
        log: &mut MessageLog,
    ) -> Result<(), Impossible> {
        if !world.actors.is_alive(actor) {
            return Err(Impossible::ActorGone);
        }
        match self {
            Action::Wait => Ok(()),
            Action::Move { dx, dy } => movement::step(actor, dx, dy, world),
            Action::Melee { dx, dy } => melee::melee(actor, dx, dy, world, rng, log),
            Action::Bump {
                dx,
                dy,
                force_attack,
            } => movement::bump(actor, dx, dy, force_attack, world, rng, log),
            Action::Attack { target } => melee::attack(actor, target, world, rng, log),
            Action::Pickup => item::pickup(actor, world, log),
            Action::Drop { item } => item::drop(actor, item, world, log),
            Action::ToggleEquip { item } => item::toggle_equip(actor, item, world, log),
            Action::Use { item, target } => item::use_item(actor, item, target, world, log),
        }
    }
}
