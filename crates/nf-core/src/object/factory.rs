//! Item templates and generators

use nf_rng::RandomSource;

use super::{Consumable, EquipmentType, Equippable, Item, ItemId};
use crate::body::{BodyPartType, EquipSlot};
use crate::combat::Attack;

pub const CLOTHING_COLORS: [&str; 5] = ["Black", "Gray", "Red", "Green", "Blue"];

fn weapon(id: ItemId, name: &str, power_bonus: i32, attacks: Vec<Attack>) -> Item {
    Item::new(id, name).with_equippable(Equippable {
        equipment_type: EquipmentType::Weapon,
        slot: EquipSlot::Held,
        power_bonus,
        defense_bonus: 0,
        body_slots: vec![BodyPartType::Arm],
        attacks,
    })
}

fn garment(
    id: ItemId,
    name: &str,
    equipment_type: EquipmentType,
    defense_bonus: i32,
    body_slots: Vec<BodyPartType>,
) -> Item {
    Item::new(id, name).with_equippable(Equippable {
        equipment_type,
        slot: EquipSlot::Worn,
        power_bonus: 0,
        defense_bonus,
        body_slots,
        attacks: Vec::new(),
    })
}

pub fn dagger(id: ItemId) -> Item {
    weapon(
        id,
        "Dagger",
        2,
        vec![Attack::new("stab", 4), Attack::new("slash", 3)],
    )
}

pub fn sword(id: ItemId) -> Item {
    weapon(
        id,
        "Sword",
        4,
        vec![Attack::new("slash", 6), Attack::new("thrust", 5)],
    )
}

pub fn knife(id: ItemId) -> Item {
    weapon(id, "Knife", 15, vec![Attack::new("cut", 3)])
}

pub fn leather_jacket(id: ItemId) -> Item {
    garment(
        id,
        "Leather Jacket",
        EquipmentType::Clothes,
        1,
        vec![BodyPartType::Arm, BodyPartType::Torso],
    )
}

pub fn pants(id: ItemId) -> Item {
    garment(id, "Ragged Pants", EquipmentType::Clothes, 1, vec![BodyPartType::Leg])
}

pub fn chain_mail(id: ItemId) -> Item {
    garment(
        id,
        "Chain Mail",
        EquipmentType::Armor,
        3,
        vec![BodyPartType::Torso, BodyPartType::Arm],
    )
}

/// Pants in a random colour
pub fn generate_pants(id: ItemId, rng: &mut impl RandomSource) -> Item {
    let color = CLOTHING_COLORS[rng.choose_index(CLOTHING_COLORS.len())];
    let mut item = pants(id);
    item.name = format!("{color} Pants");
    item
}

/// A jacket in a random colour
pub fn generate_jacket(id: ItemId, rng: &mut impl RandomSource) -> Item {
    let color = CLOTHING_COLORS[rng.choose_index(CLOTHING_COLORS.len())];
    let mut item = leather_jacket(id);
    item.name = format!("{color} Jacket");
    item
}

pub fn healing_potion(id: ItemId) -> Item {
    Item::new(id, "Health Potion").with_consumable(Consumable::Healing { amount: 4 })
}

pub fn confusion_scroll(id: ItemId) -> Item {
    Item::new(id, "Confusion Scroll").with_consumable(Consumable::Confusion { turns: 10 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nf_rng::ScriptedRng;

    #[test]
    fn test_generated_colors() {
        let mut rng = ScriptedRng::new([2, 4]);
        assert_eq!(generate_pants(ItemId(1), &mut rng).name, "Red Pants");
        assert_eq!(generate_jacket(ItemId(2), &mut rng).name, "Blue Jacket");
    }

    #[test]
    fn test_garments_are_worn() {
        let jacket = leather_jacket(ItemId(1));
        let eq = jacket.equippable.unwrap();
        assert_eq!(eq.slot, EquipSlot::Worn);
        assert_eq!(eq.body_slots, vec![BodyPartType::Arm, BodyPartType::Torso]);
    }

    #[test]
    fn test_weapons_are_held_in_arms() {
        for item in [dagger(ItemId(1)), sword(ItemId(2)), knife(ItemId(3))] {
            let eq = item.equippable.unwrap();
            assert_eq!(eq.slot, EquipSlot::Held);
            assert_eq!(eq.body_slots, vec![BodyPartType::Arm]);
        }
    }
}
