//! Picking up, dropping, equipping and using items

use crate::actor::{ActorId, EquipEvent};
use crate::ai::Ai;
use crate::error::Impossible;
use crate::gameloop::MessageLog;
use crate::object::{Consumable, ItemId};
use crate::world::World;

pub(super) fn pickup(actor: ActorId, world: &mut World, log: &mut MessageLog) -> Result<(), Impossible> {
    let a = world.actors.get(actor).ok_or(Impossible::ActorGone)?;
    let pos = a.pos;
    if world.map.items_at(pos).next().is_none() {
        return Err(Impossible::NothingToPickUp);
    }
    if a.inventory.is_full() {
        return Err(Impossible::InventoryFull);
    }

    let item = world.map.take_item_at(pos).ok_or(Impossible::NothingToPickUp)?;
    let name = item.name.clone();
    let a = world.actors.get_mut(actor).ok_or(Impossible::ActorGone)?;
    a.inventory.add(item)?;
    log.add(format!("You picked up the {name}!"));
    Ok(())
}

pub(super) fn drop(
    actor: ActorId,
    id: ItemId,
    world: &mut World,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    let a = world.actors.get_mut(actor).ok_or(Impossible::ActorGone)?;
    if a.equipment.is_equipped(id) {
        let events = a.unequip(id)?;
        log_equip_events(&events, log);
    }
    let item = a.inventory.remove(id).ok_or(Impossible::NoSuchItem)?;
    let pos = a.pos;
    log.add(format!("You dropped the {}.", item.name));
    world.map.place_item(pos, item);
    Ok(())
}

pub(super) fn toggle_equip(
    actor: ActorId,
    id: ItemId,
    world: &mut World,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    let a = world.actors.get_mut(actor).ok_or(Impossible::ActorGone)?;
    let events = a.toggle_equip(id)?;
    log_equip_events(&events, log);
    Ok(())
}

/// One line per item and direction, however many parts it covers
fn log_equip_events(events: &[EquipEvent], log: &mut MessageLog) {
    let mut seen: Vec<(ItemId, bool)> = Vec::new();
    for event in events {
        let (key, line) = match event {
            EquipEvent::Equipped { item, item_name, .. } => {
                ((*item, true), format!("You equip the {item_name}."))
            }
            EquipEvent::Unequipped { item, item_name, .. } => {
                ((*item, false), format!("You remove the {item_name}."))
            }
        };
        if !seen.contains(&key) {
            seen.push(key);
            log.add(line);
        }
    }
}

pub(super) fn use_item(
    actor: ActorId,
    id: ItemId,
    target: Option<ActorId>,
    world: &mut World,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    let a = world.actors.get(actor).ok_or(Impossible::ActorGone)?;
    let item = a.inventory.get(id).ok_or(Impossible::NoSuchItem)?;
    let Some(effect) = item.consumable else {
        return Err(Impossible::NotUsable(item.name.clone()));
    };
    let item_name = item.name.clone();

    match effect {
        Consumable::Healing { amount } => {
            if a.body.is_full_health() {
                return Err(Impossible::AlreadyHealthy);
            }
            let a = world.actors.get_mut(actor).ok_or(Impossible::ActorGone)?;
            let recovered = a.heal(amount);
            a.inventory.remove(id);
            log.add(format!("You consume the {item_name}, and recover {recovered} HP!"));
        }
        Consumable::Confusion { turns } => {
            let target_id = target.ok_or(Impossible::NoTarget)?;
            let t = world
                .actors
                .get(target_id)
                .filter(|t| t.is_alive() && !t.is_player && t.id != actor)
                .ok_or(Impossible::NoTarget)?;
            if !world.map.is_visible(t.pos) {
                return Err(Impossible::NoTarget);
            }

            let t = world.actors.get_mut(target_id).ok_or(Impossible::NoTarget)?;
            let previous = t.ai.take();
            t.ai = Some(Ai::confuse(turns, previous));
            log.add(format!(
                "The eyes of the {} look vacant, as it starts to stumble around!",
                t.name
            ));
            if let Some(a) = world.actors.get_mut(actor) {
                a.inventory.remove(id);
            }
        }
    }
    Ok(())
}
