use nf_core::actor::{Actors, templates};
use nf_core::config::{GameConfig, PathConfig, TimeCycleConfig};
use nf_core::world::{GameMap, Phase, Position, TileKind, TimeCycle, World, find_path};

#[test]
fn test_open_grid_path_uses_diagonals() {
    let map = GameMap::filled(5, 5, TileKind::Floor);
    let actors = Actors::new();
    let path = find_path(
        &map,
        &actors,
        Position::new(0, 0),
        Position::new(4, 4),
        &PathConfig::default(),
    );
    assert_eq!(path.len(), 4);
    assert_eq!(path.last(), Some(&Position::new(4, 4)));
    assert!(!path.contains(&Position::new(0, 0)));
}

#[test]
fn test_path_steps_are_adjacent_and_walkable() {
    let mut map = GameMap::filled(12, 12, TileKind::Floor);
    map.fill_rect(5, 0, 1, 10, TileKind::Wall);
    let actors = Actors::new();
    let start = Position::new(1, 1);
    let path = find_path(&map, &actors, start, Position::new(10, 1), &PathConfig::default());
    assert!(!path.is_empty());

    let mut at = start;
    for step in &path {
        assert_eq!(at.distance(*step), 1);
        assert!(map.is_walkable(*step));
        at = *step;
    }
    assert_eq!(at, Position::new(10, 1));
}

#[test]
fn test_phase_cycle_with_short_day() {
    let mut time = TimeCycle::new(&TimeCycleConfig {
        phase_ticks_dawn: 2,
        phase_ticks_daytime: 4,
        phase_ticks_dusk: 2,
        phase_ticks_nighttime: 2,
    });
    assert_eq!(time.units_in_day(), 10);
    assert_eq!(time.phase(), Phase::Dawn);

    for _ in 0..2 {
        time.tick();
    }
    assert_eq!(time.phase(), Phase::Daytime);
    assert_eq!(time.phase_name(), "daytime");

    for _ in 0..4 {
        time.tick();
    }
    assert_eq!(time.phase(), Phase::Dusk);

    for _ in 0..4 {
        time.tick();
    }
    assert_eq!(time.phase(), Phase::Dawn);
    assert_eq!(time.tick_day(), 0);
    assert_eq!(time.tick_phase(), 0);
    assert_eq!(time.day(), 1);
    assert_eq!(time.tick_global(), 10);
}

fn lit_world() -> World {
    let mut config = GameConfig::default();
    config.map.width = 30;
    config.map.height = 30;
    config.fov.min_radius = 4;
    config.fov.max_radius = Some(6);
    config.fov.initial_radius = 4;
    config.time_cycles = TimeCycleConfig {
        phase_ticks_dawn: 3,
        phase_ticks_daytime: 2,
        phase_ticks_dusk: 3,
        phase_ticks_nighttime: 2,
    };
    World::from_config(config)
}

#[test]
fn test_sight_widens_at_dawn_and_narrows_at_dusk() {
    let mut world = lit_world();
    let mut radii = Vec::new();
    for _ in 0..10 {
        world.time.tick();
        world.update_fov_radius();
        radii.push(world.fov_radius);
    }
    // dawn, dawn, day, day, dusk, dusk, dusk, night, night, dawn
    assert_eq!(radii, [5, 6, 6, 6, 5, 4, 4, 4, 4, 5]);
}

#[test]
fn test_player_sees_within_radius_and_remembers() {
    let mut world = lit_world();
    world.spawn(templates::PLAYER.build(Position::new(15, 15)));
    world.update_fov();

    assert!(world.map.is_visible(Position::new(19, 15)));
    assert!(world.map.is_visible(Position::new(17, 17)));
    assert!(!world.map.is_visible(Position::new(18, 17)));
    assert!(!world.map.is_visible(Position::new(20, 15)));

    let player = world.player;
    world.actors.get_mut(player).unwrap().pos = Position::new(5, 5);
    world.update_fov();
    assert!(!world.map.is_visible(Position::new(19, 15)));
    assert!(world.map.is_explored(Position::new(19, 15)));
}

#[test]
fn test_walls_block_sight() {
    let mut world = lit_world();
    world.map.fill_rect(17, 10, 1, 10, TileKind::Wall);
    world.spawn(templates::PLAYER.build(Position::new(15, 15)));
    world.update_fov();

    assert!(world.map.is_visible(Position::new(17, 15)));
    assert!(!world.map.is_visible(Position::new(18, 15)));
}
