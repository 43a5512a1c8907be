//! Individual body parts

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::object::ItemId;

/// Anatomical type of a body part
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum BodyPartType {
    Head = 0,
    Torso = 1,
    Arm = 2,
    Leg = 3,
    Tail = 4,
}

bitflags! {
    /// Body part capabilities
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PartFlags: u8 {
        /// Losing all HP here kills the owner outright
        const LETHAL = 0x01;
        /// Can be used to attack
        const ATTACKS = 0x02;
    }
}

/// Which of a part's two equipment slots an item goes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum EquipSlot {
    /// Clothing and armour
    Worn,
    /// Weapons and other held objects
    Held,
}

/// One part of an actor's body, with its own hit points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    /// Key within the body, e.g. "left_arm"
    pub slot: String,
    /// Display name, e.g. "Left Arm"
    pub name: String,
    pub part_type: BodyPartType,
    hp: u32,
    max_hp: u32,
    pub flags: PartFlags,
    pub worn_article: Option<ItemId>,
    pub held_object: Option<ItemId>,
}

impl BodyPart {
    pub fn new(
        slot: impl Into<String>,
        name: impl Into<String>,
        part_type: BodyPartType,
        max_hp: u32,
        flags: PartFlags,
    ) -> Self {
        Self {
            slot: slot.into(),
            name: name.into(),
            part_type,
            hp: max_hp,
            max_hp,
            flags,
            worn_article: None,
            held_object: None,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn is_lethal(&self) -> bool {
        self.flags.contains(PartFlags::LETHAL)
    }

    /// Can be struck: still has HP
    pub fn is_targetable(&self) -> bool {
        self.hp > 0
    }

    /// Can attack: has the capability and still has HP
    pub fn can_attack(&self) -> bool {
        self.flags.contains(PartFlags::ATTACKS) && self.hp > 0
    }

    /// Subtract damage, clamping at 0. Returns the HP actually removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Restore HP up to the maximum. Returns the amount recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let recovered = amount.min(self.max_hp - self.hp);
        self.hp += recovered;
        recovered
    }

    /// Item in the given slot
    pub fn slot_item(&self, slot: EquipSlot) -> Option<ItemId> {
        match slot {
            EquipSlot::Worn => self.worn_article,
            EquipSlot::Held => self.held_object,
        }
    }

    pub(crate) fn slot_item_mut(&mut self, slot: EquipSlot) -> &mut Option<ItemId> {
        match slot {
            EquipSlot::Worn => &mut self.worn_article,
            EquipSlot::Held => &mut self.held_object,
        }
    }

    /// Worn article and held object, whichever are present
    pub fn equipped_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.worn_article.into_iter().chain(self.held_object)
    }
}
