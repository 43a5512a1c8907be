//! Items
//!
//! Only the parts of an item the simulation cares about: what it adds in
//! combat, where on a body it goes, and what it does when used.

mod factory;
mod inventory;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::body::{BodyPartType, EquipSlot};
use crate::combat::Attack;

pub use factory::{
    CLOTHING_COLORS, chain_mail, confusion_scroll, dagger, generate_jacket, generate_pants,
    healing_potion, knife, leather_jacket, pants, sword,
};
pub use inventory::Inventory;

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Broad equipment category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EquipmentType {
    Weapon,
    Armor,
    Clothes,
}

/// Equipment properties of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equippable {
    pub equipment_type: EquipmentType,
    /// Worn article or held object
    pub slot: EquipSlot,
    pub power_bonus: i32,
    pub defense_bonus: i32,
    /// Anatomical types this item covers
    pub body_slots: Vec<BodyPartType>,
    /// Attacks granted while wielded (weapons only)
    pub attacks: Vec<Attack>,
}

impl Equippable {
    pub fn is_weapon(&self) -> bool {
        self.equipment_type == EquipmentType::Weapon
    }
}

/// Single-use effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consumable {
    /// Restore up to `amount` HP across the user's body
    Healing { amount: u32 },
    /// Confuse a target for `turns` turns
    Confusion { turns: u32 },
}

/// An item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub equippable: Option<Equippable>,
    pub consumable: Option<Consumable>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            equippable: None,
            consumable: None,
        }
    }

    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }

    pub fn with_consumable(mut self, consumable: Consumable) -> Self {
        self.consumable = Some(consumable);
        self
    }

    pub fn is_weapon(&self) -> bool {
        self.equippable.as_ref().is_some_and(Equippable::is_weapon)
    }

    pub fn power_bonus(&self) -> i32 {
        self.equippable.as_ref().map_or(0, |e| e.power_bonus)
    }

    pub fn defense_bonus(&self) -> i32 {
        self.equippable.as_ref().map_or(0, |e| e.defense_bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_item_has_no_bonuses() {
        let rock = Item::new(ItemId(1), "Rock");
        assert_eq!(rock.power_bonus(), 0);
        assert_eq!(rock.defense_bonus(), 0);
        assert!(!rock.is_weapon());
    }

    #[test]
    fn test_weapon_bonuses() {
        let blade = sword(ItemId(2));
        assert!(blade.is_weapon());
        assert_eq!(blade.power_bonus(), 4);
        assert!(!blade.equippable.unwrap().attacks.is_empty());
    }

    #[test]
    fn test_item_id_next() {
        assert_eq!(ItemId(4).next(), ItemId(5));
    }
}
