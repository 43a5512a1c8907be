//! The shared world
//!
//! Map, actors and clock, plus the derived per-turn state (FOV radius and
//! visibility). Everything an action or an AI strategy needs to read or
//! change lives here, apart from the random source and the message log.

mod building;
mod map;
mod path;
mod time;

use serde::{Deserialize, Serialize};

use crate::actor::{Actor, ActorId, Actors};
use crate::config::GameConfig;
use crate::object::ItemId;

pub use building::{Building, BuildingId, BuildingKind};
pub use map::{FloorItem, GameMap, TileKind};
pub use path::find_path;
pub use time::{Phase, TimeCycle};

/// A map coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev distance; diagonal neighbours are 1 apart
    pub fn distance(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Step (each component -1, 0 or 1) that heads towards `other`
    pub fn step_towards(self, other: Position) -> (i32, i32) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

/// Map, actors and clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub map: GameMap,
    pub actors: Actors,
    pub time: TimeCycle,
    pub player: ActorId,
    /// Current sight radius, widening at dawn and narrowing at dusk
    pub fov_radius: i32,
    pub config: GameConfig,
    next_item_id: ItemId,
}

impl World {
    pub fn new(config: GameConfig, map: GameMap) -> Self {
        Self {
            map,
            actors: Actors::new(),
            time: TimeCycle::new(&config.time_cycles),
            player: ActorId::NONE,
            fov_radius: config.fov.initial_radius,
            config,
            next_item_id: ItemId::NONE,
        }
    }

    /// Walled open ground of the configured size
    pub fn from_config(config: GameConfig) -> Self {
        let map = GameMap::walled(config.map.width, config.map.height);
        Self::new(config, map)
    }

    /// Add an actor. Spawning a player makes it the world's player.
    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        let is_player = actor.is_player;
        let id = self.actors.spawn(actor);
        if is_player {
            self.player = id;
        }
        id
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actors.get(self.player)
    }

    pub fn player_alive(&self) -> bool {
        self.actors.is_alive(self.player)
    }

    /// Fresh id for a new item
    pub fn allocate_item_id(&mut self) -> ItemId {
        self.next_item_id = self.next_item_id.next();
        self.next_item_id
    }

    /// Make an actor the owner of a building
    pub fn assign_dwelling(&mut self, actor: ActorId, building: BuildingId) {
        if let Some(b) = self.map.buildings.iter_mut().find(|b| b.id == building) {
            b.owner = Some(actor);
        }
        if let Some(a) = self.actors.get_mut(actor) {
            a.dwelling = Some(building);
        }
    }

    /// Where an actor goes home to
    pub fn dwelling_of(&self, actor: &Actor) -> Option<Position> {
        actor
            .dwelling
            .and_then(|id| self.map.building(id))
            .map(Building::origin)
    }

    /// Widen sight during dawn, narrow it during dusk
    pub fn update_fov_radius(&mut self) {
        let max = self.config.max_fov_radius();
        let min = self.config.fov.min_radius;
        match self.time.phase() {
            Phase::Dawn => self.fov_radius = (self.fov_radius + 1).min(max),
            Phase::Dusk => self.fov_radius = (self.fov_radius - 1).max(min),
            Phase::Daytime | Phase::Nighttime => {}
        }
    }

    /// Recompute what the player can see
    pub fn update_fov(&mut self) {
        if let Some(pos) = self.player().map(|p| p.pos) {
            self.map.update_visibility(pos, self.fov_radius);
        }
    }

    /// Route for an actor at `from` to `to`, excluding `from`
    pub fn path_to(&self, from: Position, to: Position) -> Vec<Position> {
        find_path(&self.map, &self.actors, from, to, &self.config.pathing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::templates;
    use crate::config::TimeCycleConfig;

    fn world() -> World {
        let mut config = GameConfig::default();
        config.map.width = 20;
        config.map.height = 12;
        config.time_cycles = TimeCycleConfig {
            phase_ticks_dawn: 3,
            phase_ticks_daytime: 3,
            phase_ticks_dusk: 3,
            phase_ticks_nighttime: 3,
        };
        World::from_config(config)
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = Position::new(1, 1);
        assert_eq!(a.distance(Position::new(4, 2)), 3);
        assert_eq!(a.distance(Position::new(2, 2)), 1);
        assert_eq!(a.step_towards(Position::new(-5, 1)), (-1, 0));
    }

    #[test]
    fn test_spawn_player() {
        let mut world = world();
        let id = world.spawn(templates::PLAYER.build(Position::new(2, 2)));
        assert_eq!(world.player, id);
        assert!(world.player_alive());
    }

    #[test]
    fn test_fov_radius_band() {
        let mut world = world();
        // max radius is height / 2 = 6
        assert_eq!(world.config.max_fov_radius(), 6);
        for _ in 0..5 {
            world.update_fov_radius();
        }
        assert_eq!(world.fov_radius, 6);

        world.time.tick();
        world.time.tick();
        world.time.tick();
        world.time.tick();
        world.time.tick();
        world.time.tick();
        assert_eq!(world.time.phase(), Phase::Dusk);
        for _ in 0..5 {
            world.update_fov_radius();
        }
        assert_eq!(world.fov_radius, 4);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let mut world = world();
        let a = world.allocate_item_id();
        let b = world.allocate_item_id();
        assert_ne!(a, b);
        assert_ne!(a, ItemId::NONE);
    }

    #[test]
    fn test_dwelling() {
        let mut world = world();
        let villager = world.spawn(templates::VILLAGER.build(Position::new(2, 2)));
        let home = world.map.add_building(Building::new("Hut", 10, 5, 3, 3));
        world.assign_dwelling(villager, home);
        let actor = world.actors.get(villager).unwrap();
        assert_eq!(world.dwelling_of(actor), Some(Position::new(10, 5)));
        assert_eq!(world.map.building(home).unwrap().owner, Some(villager));
    }
}
