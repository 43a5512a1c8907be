//! Actor templates
//!
//! Static descriptions of the kinds of actor a scenario can spawn.

use super::Actor;
use crate::ai::AiKind;
use crate::object::Inventory;
use crate::world::Position;

/// Static description of a kind of actor
#[derive(Debug, Clone, Copy)]
pub struct ActorTemplate {
    pub name: &'static str,
    pub race: &'static str,
    pub is_player: bool,
    pub evil: bool,
    pub fighting: f32,
    pub inventory_capacity: usize,
    /// Starting strategy; `None` for the player
    pub ai: Option<AiKind>,
}

impl ActorTemplate {
    /// A fresh actor at `pos`. Its id is assigned when it is spawned.
    pub fn build(&self, pos: Position) -> Actor {
        let mut actor = Actor::new(self.name, self.race, pos);
        actor.is_player = self.is_player;
        actor.evil = self.evil;
        actor.skills.fighting = self.fighting;
        actor.inventory = Inventory::new(self.inventory_capacity);
        actor.ai = self.ai.map(AiKind::instantiate);
        actor
    }
}

pub const PLAYER: ActorTemplate = ActorTemplate {
    name: "Player",
    race: "human",
    is_player: true,
    evil: false,
    fighting: 10.0,
    inventory_capacity: 26,
    ai: None,
};

pub const VILLAGER: ActorTemplate = ActorTemplate {
    name: "Villager",
    race: "human",
    is_player: false,
    evil: false,
    fighting: 8.0,
    inventory_capacity: 10,
    ai: Some(AiKind::Routine),
};

pub const HUNTER: ActorTemplate = ActorTemplate {
    name: "Stranger",
    race: "human",
    is_player: false,
    evil: true,
    fighting: 14.0,
    inventory_capacity: 10,
    ai: Some(AiKind::Hunter),
};

pub const ORC: ActorTemplate = ActorTemplate {
    name: "Orc",
    race: "orc",
    is_player: false,
    evil: true,
    fighting: 10.0,
    inventory_capacity: 0,
    ai: Some(AiKind::Hostile),
};

pub const TROLL: ActorTemplate = ActorTemplate {
    name: "Troll",
    race: "troll",
    is_player: false,
    evil: true,
    fighting: 16.0,
    inventory_capacity: 0,
    ai: Some(AiKind::Hostile),
};

pub const WOLF: ActorTemplate = ActorTemplate {
    name: "Wolf",
    race: "wolf",
    is_player: false,
    evil: false,
    fighting: 9.0,
    inventory_capacity: 0,
    ai: Some(AiKind::Wander),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Ai;
    use crate::body::BodyPartType;

    #[test]
    fn test_player_has_no_ai() {
        let player = PLAYER.build(Position::new(1, 2));
        assert!(player.is_player);
        assert!(player.ai.is_none());
        assert_eq!(player.pos, Position::new(1, 2));
    }

    #[test]
    fn test_templates_carry_strategy() {
        assert!(matches!(ORC.build(Position::ORIGIN).ai, Some(Ai::Hostile(_))));
        assert!(matches!(VILLAGER.build(Position::ORIGIN).ai, Some(Ai::Routine(_))));
        assert!(matches!(HUNTER.build(Position::ORIGIN).ai, Some(Ai::Hunter(_))));
    }

    #[test]
    fn test_wolf_body() {
        let wolf = WOLF.build(Position::ORIGIN);
        assert!(wolf.body.has_part_type(BodyPartType::Tail));
        assert!(!wolf.body.has_part_type(BodyPartType::Arm));
    }
}
