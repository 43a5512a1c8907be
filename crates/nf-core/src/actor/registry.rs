//! Actor registry

use serde::{Deserialize, Serialize};

use super::{Actor, ActorId};
use crate::world::Position;

/// All actors in spawn order. Actors are never removed; the dead stay as remains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actors {
    actors: Vec<Actor>,
    next_id: ActorId,
}

impl Actors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an actor, assigning it a fresh id
    pub fn spawn(&mut self, mut actor: Actor) -> ActorId {
        self.next_id = self.next_id.next();
        actor.id = self.next_id;
        self.actors.push(actor);
        self.next_id
    }

    fn index_of(&self, id: ActorId) -> Option<usize> {
        let idx = usize::try_from(id.0.checked_sub(1)?).ok()?;
        (self.actors.get(idx)?.id == id).then_some(idx)
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.index_of(id).map(|idx| &self.actors[idx])
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.index_of(id).map(|idx| &mut self.actors[idx])
    }

    /// Two distinct actors mutably at once
    pub fn pair_mut(&mut self, a: ActorId, b: ActorId) -> Option<(&mut Actor, &mut Actor)> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return None;
        }
        if ia < ib {
            let (left, right) = self.actors.split_at_mut(ib);
            Some((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.actors.split_at_mut(ia);
            Some((&mut right[0], &mut left[ib]))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    /// Ids in spawn order
    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.iter().map(|a| a.id).collect()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn is_alive(&self, id: ActorId) -> bool {
        self.get(id).is_some_and(Actor::is_alive)
    }

    /// Living actors
    pub fn living(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().filter(|a| a.is_alive())
    }

    /// The living actor standing on a tile
    pub fn actor_at(&self, pos: Position) -> Option<&Actor> {
        self.living().find(|a| a.pos == pos)
    }

    /// The living actor on a tile that stops movement into it
    pub fn blocking_at(&self, pos: Position) -> Option<&Actor> {
        self.living().find(|a| a.pos == pos && a.blocks_movement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(name: &str, x: i32, y: i32) -> Actor {
        Actor::new(name, "human", Position::new(x, y))
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let mut actors = Actors::new();
        let a = actors.spawn(actor("a", 0, 0));
        let b = actors.spawn(actor("b", 1, 0));
        assert_eq!(a, ActorId(1));
        assert_eq!(b, ActorId(2));
        assert_eq!(actors.get(b).unwrap().name, "b");
        assert!(actors.get(ActorId::NONE).is_none());
        assert!(actors.get(ActorId(3)).is_none());
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut actors = Actors::new();
        let a = actors.spawn(actor("a", 0, 0));
        let b = actors.spawn(actor("b", 1, 0));
        {
            let (x, y) = actors.pair_mut(b, a).unwrap();
            assert_eq!(x.name, "b");
            assert_eq!(y.name, "a");
        }
        assert!(actors.pair_mut(a, a).is_none());
    }

    #[test]
    fn test_actor_at_ignores_dead() {
        let mut actors = Actors::new();
        let a = actors.spawn(actor("a", 3, 3));
        assert!(actors.blocking_at(Position::new(3, 3)).is_some());
        actors.get_mut(a).unwrap().die();
        assert!(actors.actor_at(Position::new(3, 3)).is_none());
        assert!(actors.blocking_at(Position::new(3, 3)).is_none());
        assert!(!actors.is_alive(a));
    }
}
