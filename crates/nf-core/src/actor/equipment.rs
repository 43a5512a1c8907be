//! Equipment worn and held on body parts
//!
//! An equipped item lives here (not in the inventory) and is referenced by
//! id from every body-part slot it covers. Bonuses are summed over the
//! equipped items each time they are asked for.

use serde::{Deserialize, Serialize};

use crate::body::{Body, EquipSlot};
use crate::object::{Item, ItemId};

/// Notification produced while equipping or unequipping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquipEvent {
    Equipped {
        item: ItemId,
        item_name: String,
        part: String,
    },
    Unequipped {
        item: ItemId,
        item_name: String,
        part: String,
    },
}

impl EquipEvent {
    pub fn item(&self) -> ItemId {
        match self {
            EquipEvent::Equipped { item, .. } | EquipEvent::Unequipped { item, .. } => *item,
        }
    }
}

/// Result of a successful equip
#[derive(Debug, Default)]
pub struct EquipChange {
    pub events: Vec<EquipEvent>,
    /// Items pushed off every part they covered; they belong in the inventory again
    pub displaced: Vec<Item>,
}

/// Items currently equipped by one actor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    items: Vec<Item>,
}

impl Equipment {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_equipped(&self, id: ItemId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The first equipped weapon
    pub fn weapon(&self) -> Option<&Item> {
        self.items.iter().find(|i| i.is_weapon())
    }

    pub fn power_bonus(&self) -> i32 {
        self.items.iter().map(Item::power_bonus).sum()
    }

    pub fn defense_bonus(&self) -> i32 {
        self.items.iter().map(Item::defense_bonus).sum()
    }

    /// Put an item on every body part of the types it requires.
    ///
    /// Occupied slots are emptied first, reporting an unequip for each.
    /// If the item isn't equippable or the body has no part of a required
    /// type, nothing changes and the item is handed back in `Err`.
    pub fn equip(&mut self, body: &mut Body, item: Item) -> Result<EquipChange, Item> {
        let Some(equippable) = item.equippable.as_ref() else {
            return Err(item);
        };
        if self.is_equipped(item.id) {
            return Ok(EquipChange::default());
        }

        let slot = equippable.slot;
        let targets: Vec<usize> = body
            .parts()
            .iter()
            .enumerate()
            .filter(|(_, p)| equippable.body_slots.contains(&p.part_type))
            .map(|(idx, _)| idx)
            .collect();
        if targets.is_empty() {
            return Err(item);
        }

        let mut change = EquipChange::default();
        let mut touched = Vec::new();
        for idx in targets {
            let part = &mut body.parts_mut()[idx];
            if let Some(current) = part.slot_item(slot) {
                change.events.push(EquipEvent::Unequipped {
                    item: current,
                    item_name: self.name_of(current),
                    part: part.name.clone(),
                });
                touched.push(current);
            }
            *part.slot_item_mut(slot) = Some(item.id);
            change.events.push(EquipEvent::Equipped {
                item: item.id,
                item_name: item.name.clone(),
                part: part.name.clone(),
            });
        }

        touched.dedup();
        for id in touched {
            if !Self::covers_any(body, id) {
                if let Some(idx) = self.items.iter().position(|i| i.id == id) {
                    change.displaced.push(self.items.remove(idx));
                }
            }
        }

        self.items.push(item);
        Ok(change)
    }

    /// Take an item off every part it covers and hand it back
    pub fn unequip(&mut self, body: &mut Body, id: ItemId) -> Option<(Item, Vec<EquipEvent>)> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(idx);
        let mut events = Vec::new();
        for part in body.parts_mut() {
            for slot in [EquipSlot::Worn, EquipSlot::Held] {
                if part.slot_item(slot) == Some(id) {
                    *part.slot_item_mut(slot) = None;
                    events.push(EquipEvent::Unequipped {
                        item: id,
                        item_name: item.name.clone(),
                        part: part.name.clone(),
                    });
                }
            }
        }
        Some((item, events))
    }

    fn covers_any(body: &Body, id: ItemId) -> bool {
        body.parts()
            .iter()
            .any(|p| p.equipped_items().any(|i| i == id))
    }

    fn name_of(&self, id: ItemId) -> String {
        self.get(id).map_or_else(|| "something".to_string(), |i| i.name.clone())
    }
}
