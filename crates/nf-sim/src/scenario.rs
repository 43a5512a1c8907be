//! Village scenario
//!
//! A walled meadow with a few houses, one villager living in each, a
//! stranger who hunts them, an orc, a wolf and the player. Stands in for
//! the level generator the simulation core does not provide.

use nf_core::actor::{ActorId, ActorTemplate, templates};
use nf_core::config::GameConfig;
use nf_core::object::{
    Item, confusion_scroll, dagger, generate_jacket, generate_pants, healing_potion, knife, sword,
};
use nf_core::world::{Building, BuildingId, Position, World};
use nf_core::{GameRng, GameState};

/// Attempts at placing a house before giving up on it
const HOUSE_ATTEMPTS: u32 = 30;

/// Attempts at finding a free tile for an actor or item
const PLACE_ATTEMPTS: u32 = 200;

const HOUSE_MIN: u32 = 4;
const HOUSE_MAX: u32 = 7;

/// How many houses to try for on a map of the given size
fn house_count(config: &GameConfig) -> u32 {
    let area = u32::from(config.map.width) * u32::from(config.map.height);
    (area / 600).clamp(1, 6)
}

/// Build the village and wrap it in a fresh game state
pub fn build(config: GameConfig, mut rng: GameRng) -> GameState {
    let mut world = World::from_config(config);

    let houses = lay_out_houses(&mut world, &mut rng);
    tracing::info!(houses = houses.len(), "village laid out");

    for (n, house) in houses.iter().enumerate() {
        let Some(home) = world.map.building(*house).map(Building::center) else {
            continue;
        };
        let villager = world.spawn(templates::VILLAGER.build(home));
        if let Some(v) = world.actors.get_mut(villager) {
            v.name = format!("Villager {}", n + 1);
        }
        world.assign_dwelling(villager, *house);
        dress(&mut world, villager, &mut rng);
    }

    let player = spawn_free(&mut world, &templates::PLAYER, &mut rng);
    let item = sword(world.allocate_item_id());
    give(&mut world, player, item, true);
    let item = healing_potion(world.allocate_item_id());
    give(&mut world, player, item, false);
    let item = confusion_scroll(world.allocate_item_id());
    give(&mut world, player, item, false);
    dress(&mut world, player, &mut rng);

    let hunter = spawn_free(&mut world, &templates::HUNTER, &mut rng);
    let item = knife(world.allocate_item_id());
    give(&mut world, hunter, item, true);
    dress(&mut world, hunter, &mut rng);

    spawn_free(&mut world, &templates::ORC, &mut rng);
    spawn_free(&mut world, &templates::WOLF, &mut rng);

    if let Some(pos) = free_tile(&world, &mut rng) {
        let id = world.allocate_item_id();
        world.map.place_item(pos, dagger(id));
    }

    GameState::new(world, rng)
}

/// Place non-touching houses wherever they fit
fn lay_out_houses(world: &mut World, rng: &mut GameRng) -> Vec<BuildingId> {
    let width = world.map.width();
    let height = world.map.height();
    let mut placed = Vec::new();

    for n in 0..house_count(&world.config) {
        for _ in 0..HOUSE_ATTEMPTS {
            let w = (HOUSE_MIN + rng.rn2(HOUSE_MAX - HOUSE_MIN + 1)) as i32;
            let h = (HOUSE_MIN + rng.rn2(HOUSE_MAX - HOUSE_MIN + 1)) as i32;
            // Keep a walkable ring between the house and the boundary wall
            let (span_x, span_y) = (width - w - 4, height - h - 4);
            if span_x <= 0 || span_y <= 0 {
                break;
            }
            let x = 2 + rng.rn2(span_x as u32) as i32;
            let y = 2 + rng.rn2(span_y as u32) as i32;
            let house = Building::new(format!("House {}", n + 1), x, y, w, h);
            if world.map.buildings.iter().any(|b| b.intersects(&house)) {
                continue;
            }
            placed.push(world.map.add_building(house));
            break;
        }
    }
    placed
}

/// A random walkable tile nobody blocks
fn free_tile(world: &World, rng: &mut GameRng) -> Option<Position> {
    let (width, height) = (world.map.width(), world.map.height());
    if width <= 2 || height <= 2 {
        return None;
    }
    (0..PLACE_ATTEMPTS)
        .map(|_| {
            Position::new(
                1 + rng.rn2((width - 2) as u32) as i32,
                1 + rng.rn2((height - 2) as u32) as i32,
            )
        })
        .find(|&pos| world.map.is_walkable(pos) && world.actors.blocking_at(pos).is_none())
}

fn spawn_free(world: &mut World, template: &ActorTemplate, rng: &mut GameRng) -> ActorId {
    let pos = free_tile(world, rng).unwrap_or(Position::new(1, 1));
    world.spawn(template.build(pos))
}

/// Hand an actor an item, optionally equipping it
fn give(world: &mut World, actor: ActorId, item: Item, equip: bool) {
    let Some(a) = world.actors.get_mut(actor) else {
        return;
    };
    let result = if equip {
        a.equip_item(item).map(|_| ())
    } else {
        a.inventory.add(item)
    };
    if let Err(reason) = result {
        tracing::warn!(actor = %a.name, %reason, "could not hand out item");
    }
}

/// Random coloured jacket and pants
fn dress(world: &mut World, actor: ActorId, rng: &mut GameRng) {
    let jacket = generate_jacket(world.allocate_item_id(), rng);
    give(world, actor, jacket, true);
    let pants = generate_pants(world.allocate_item_id(), rng);
    give(world, actor, pants, true);
}
