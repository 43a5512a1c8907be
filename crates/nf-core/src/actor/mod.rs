//! Actors
//!
//! Everything that takes turns: the player, villagers, monsters. An actor
//! owns its body, equipment, inventory and (for non-players) its current
//! AI strategy.

mod equipment;
mod registry;
pub mod templates;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ai::Ai;
use crate::body::{Body, DamageReport};
use crate::error::Impossible;
use crate::object::{Inventory, Item, ItemId};
use crate::world::{BuildingId, Position};
use crate::{BASE_FIGHTING_SKILL, DEFAULT_INVENTORY_CAPACITY};

pub use equipment::{EquipChange, EquipEvent, Equipment};
pub use registry::Actors;
pub use templates::ActorTemplate;

/// Unique identifier for actors, assigned at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    pub const NONE: ActorId = ActorId(0);

    pub fn next(self) -> Self {
        ActorId(self.0 + 1)
    }
}

/// Learned abilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub fighting: f32,
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            fighting: BASE_FIGHTING_SKILL,
        }
    }
}

impl Skills {
    /// Whole-number fighting skill used as a draw bound
    pub fn fighting_level(&self) -> u32 {
        self.fighting.max(0.0).floor() as u32
    }

    pub fn gain_fighting(&mut self, amount: f32) {
        self.fighting += amount;
    }
}

/// Kill record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deeds {
    pub kills: u32,
    pub evil_kills: u32,
}

impl Deeds {
    pub fn record_kill(&mut self, victim_evil: bool) {
        self.kills += 1;
        if victim_evil {
            self.evil_kills += 1;
        }
    }
}

/// A turn-taking creature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub race: String,
    pub pos: Position,
    pub is_player: bool,
    pub evil: bool,
    pub blocks_movement: bool,
    alive: bool,
    pub body: Body,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub skills: Skills,
    pub deeds: Deeds,
    /// Current strategy; `None` for the player and the dead
    pub ai: Option<Ai>,
    /// Actors this one will never pick as a victim
    pub friends: BTreeSet<ActorId>,
    /// Building this actor goes home to at night
    pub dwelling: Option<BuildingId>,
}

impl Actor {
    pub fn new(name: impl Into<String>, race: impl Into<String>, pos: Position) -> Self {
        let race = race.into();
        Self {
            id: ActorId::NONE,
            name: name.into(),
            body: Body::for_race(&race),
            race,
            pos,
            is_player: false,
            evil: false,
            blocks_movement: true,
            alive: true,
            equipment: Equipment::default(),
            inventory: Inventory::new(DEFAULT_INVENTORY_CAPACITY),
            skills: Skills::default(),
            deeds: Deeds::default(),
            ai: None,
            friends: BTreeSet::new(),
            dwelling: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Chebyshev distance to a position
    pub fn distance_to(&self, pos: Position) -> i32 {
        self.pos.distance(pos)
    }

    pub fn power_bonus(&self) -> i32 {
        self.equipment.power_bonus()
    }

    pub fn defense_bonus(&self) -> i32 {
        self.equipment.defense_bonus()
    }

    /// Damage a body part, dying if the blow is fatal.
    ///
    /// The dead take no further damage: returns `None` for a dead actor or
    /// an unknown slot.
    pub fn take_damage(&mut self, slot: &str, amount: u32) -> Option<DamageReport> {
        if !self.alive {
            return None;
        }
        let report = self.body.take_damage(slot, amount)?;
        if report.fatal {
            self.die();
        }
        Some(report)
    }

    /// Spread healing over the body; returns the HP recovered
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.alive {
            return 0;
        }
        self.body.heal_all(amount)
    }

    /// Turn into remains. Returns false if already dead.
    pub fn die(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        tracing::info!(actor = %self.name, id = ?self.id, "died");
        self.alive = false;
        self.ai = None;
        self.blocks_movement = false;
        self.name = format!("remains of {}", self.name);
        true
    }

    /// Equip an item from the inventory onto every matching body part.
    ///
    /// Items pushed off all of their parts go back to the inventory. An
    /// item that fits no part of this body stays in the inventory and
    /// nothing is reported.
    pub fn equip(&mut self, id: ItemId) -> Result<Vec<EquipEvent>, Impossible> {
        let item = self.inventory.get(id).ok_or(Impossible::NoSuchItem)?;
        if item.equippable.is_none() {
            return Err(Impossible::NotEquippable(item.name.clone()));
        }
        let item = self.inventory.remove(id).ok_or(Impossible::NoSuchItem)?;

        match self.equipment.equip(&mut self.body, item) {
            Ok(change) => {
                for displaced in change.displaced {
                    self.inventory.restore(displaced);
                }
                Ok(change.events)
            }
            Err(item) => {
                tracing::debug!(actor = %self.name, item = %item.name, "no body part fits item");
                self.inventory.restore(item);
                Ok(Vec::new())
            }
        }
    }

    /// Give an item to this actor and equip it straight away
    pub fn equip_item(&mut self, item: Item) -> Result<Vec<EquipEvent>, Impossible> {
        let id = item.id;
        self.inventory.restore(item);
        self.equip(id)
    }

    /// Take an equipped item off and put it in the inventory
    pub fn unequip(&mut self, id: ItemId) -> Result<Vec<EquipEvent>, Impossible> {
        let (item, events) = self
            .equipment
            .unequip(&mut self.body, id)
            .ok_or(Impossible::NoSuchItem)?;
        self.inventory.restore(item);
        Ok(events)
    }

    /// Equip the item if it is carried, unequip it if it is worn or held
    pub fn toggle_equip(&mut self, id: ItemId) -> Result<Vec<EquipEvent>, Impossible> {
        if self.equipment.is_equipped(id) {
            self.unequip(id)
        } else {
            self.equip(id)
        }
    }

    /// Find an item carried or equipped
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.get(id).or_else(|| self.equipment.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{healing_potion, leather_jacket, pants, sword};

    fn villager() -> Actor {
        Actor::new("Ana", "human", Position::new(0, 0))
    }

    #[test]
    fn test_die_is_idempotent() {
        let mut actor = villager();
        assert!(actor.die());
        assert!(!actor.die());
        assert_eq!(actor.name, "remains of Ana");
        assert!(!actor.blocks_movement);
        assert!(actor.ai.is_none());
    }

    #[test]
    fn test_dead_take_no_damage() {
        let mut actor = villager();
        actor.die();
        assert!(actor.take_damage("torso", 5).is_none());
        assert!(actor.body.is_full_health());
    }

    #[test]
    fn test_lethal_damage_kills() {
        let mut actor = villager();
        let report = actor.take_damage("torso", 30).unwrap();
        assert!(report.fatal);
        assert!(!actor.is_alive());
    }

    #[test]
    fn test_equip_from_inventory() {
        let mut actor = villager();
        actor.inventory.add(sword(ItemId(1))).unwrap();
        let events = actor.equip(ItemId(1)).unwrap();
        assert_eq!(events.len(), 2);
        assert!(actor.inventory.is_empty());
        assert_eq!(actor.power_bonus(), 4);
    }

    #[test]
    fn test_displaced_item_returns_to_inventory() {
        let mut actor = villager();
        actor.equip_item(sword(ItemId(1))).unwrap();
        actor.equip_item(crate::object::dagger(ItemId(2))).unwrap();
        assert!(actor.inventory.contains(ItemId(1)));
        assert!(actor.equipment.is_equipped(ItemId(2)));
    }

    #[test]
    fn test_equip_consumable_fails() {
        let mut actor = villager();
        actor.inventory.add(healing_potion(ItemId(3))).unwrap();
        assert_eq!(
            actor.equip(ItemId(3)),
            Err(Impossible::NotEquippable("Health Potion".into()))
        );
        assert!(actor.inventory.contains(ItemId(3)));
    }

    #[test]
    fn test_beast_wears_jacket_on_torso() {
        let mut wolf = Actor::new("Wolf", "wolf", Position::new(0, 0));
        // Jacket covers arms and torso; a wolf has a torso so it still fits
        let events = wolf.equip_item(leather_jacket(ItemId(1))).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_unfitting_item_stays_carried() {
        let mut actor = villager();
        actor.body = Body::new(vec![crate::body::BodyPart::new(
            "torso",
            "Torso",
            crate::body::BodyPartType::Torso,
            30,
            crate::body::PartFlags::LETHAL,
        )]);
        let events = actor.equip_item(pants(ItemId(4))).unwrap();
        assert!(events.is_empty());
        assert!(actor.inventory.contains(ItemId(4)));
        assert!(!actor.equipment.is_equipped(ItemId(4)));
    }

    #[test]
    fn test_toggle_equip() {
        let mut actor = villager();
        actor.inventory.add(pants(ItemId(5))).unwrap();
        actor.toggle_equip(ItemId(5)).unwrap();
        assert!(actor.equipment.is_equipped(ItemId(5)));
        actor.toggle_equip(ItemId(5)).unwrap();
        assert!(actor.inventory.contains(ItemId(5)));
        assert_eq!(actor.defense_bonus(), 0);
    }

    #[test]
    fn test_record_kill() {
        let mut deeds = Deeds::default();
        deeds.record_kill(false);
        deeds.record_kill(true);
        assert_eq!(deeds.kills, 2);
        assert_eq!(deeds.evil_kills, 1);
    }

    #[test]
    fn test_fighting_level_floors() {
        let skills = Skills { fighting: 10.975 };
        assert_eq!(skills.fighting_level(), 10);
    }
}
