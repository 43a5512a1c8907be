use nf_core::action::Action;
use nf_core::actor::templates;
use nf_core::config::GameConfig;
use nf_core::error::Impossible;
use nf_core::object::{healing_potion, sword};
use nf_core::world::{Building, Position, World};
use nf_core::{GameLoop, GameRng, GameState, TurnResult};

fn hamlet() -> GameState {
    let mut config = GameConfig::default();
    config.map.width = 30;
    config.map.height = 20;
    config.time_cycles.phase_ticks_dawn = 3;
    config.time_cycles.phase_ticks_daytime = 10;
    config.time_cycles.phase_ticks_dusk = 3;
    config.time_cycles.phase_ticks_nighttime = 8;
    let mut world = World::from_config(config);

    let house = world.map.add_building(Building::new("Cottage", 20, 3, 5, 4));
    let player = world.spawn(templates::PLAYER.build(Position::new(4, 10)));
    let weapon = sword(world.allocate_item_id());
    world.actors.get_mut(player).unwrap().equip_item(weapon).unwrap();

    let villager = world.spawn(templates::VILLAGER.build(Position::new(15, 8)));
    world.assign_dwelling(villager, house);
    let hunter = world.spawn(templates::HUNTER.build(Position::new(25, 15)));
    let orc = world.spawn(templates::ORC.build(Position::new(10, 12)));
    let wolf = world.spawn(templates::WOLF.build(Position::new(18, 14)));
    world
        .actors
        .get_mut(hunter)
        .unwrap()
        .friends
        .extend([wolf, orc, player]);

    let potion = healing_potion(world.allocate_item_id());
    world.map.place_item(Position::new(6, 6), potion);

    GameState::new(world, GameRng::new(2024))
}

fn play(game: &mut GameLoop, turns: usize) -> Vec<Result<TurnResult, Impossible>> {
    (0..turns).map(|_| game.tick(Action::Wait)).collect()
}

fn snapshot(game: &GameLoop) -> String {
    serde_json::to_string(game.state()).unwrap()
}

#[test]
fn test_json_round_trip_continues_identically() {
    let mut game = GameLoop::new(hamlet());
    play(&mut game, 15);

    let json = snapshot(&game);
    let restored: GameState = serde_json::from_str(&json).unwrap();
    let mut restored = GameLoop::new(restored);
    assert_eq!(snapshot(&restored), json);

    let original_results = play(&mut game, 60);
    let restored_results = play(&mut restored, 60);
    assert_eq!(original_results, restored_results);
    assert_eq!(snapshot(&game), snapshot(&restored));
}

#[test]
fn test_clone_continues_identically() {
    let mut game = GameLoop::new(hamlet());
    play(&mut game, 5);
    let mut copy = GameLoop::new(game.state().clone());

    assert_eq!(play(&mut game, 40), play(&mut copy, 40));
    assert_eq!(game.state().world, copy.state().world);
    assert_eq!(game.state_mut().rng.rn2(1000), copy.state_mut().rng.rn2(1000));
}

#[test]
fn test_same_seed_same_history() {
    let mut a = GameLoop::new(hamlet());
    let mut b = GameLoop::new(hamlet());
    play(&mut a, 50);
    play(&mut b, 50);
    assert_eq!(a.state().messages.history(), b.state().messages.history());
    assert_eq!(a.state().turns, b.state().turns);
}

#[test]
fn test_friends_serialize_in_a_stable_order() {
    let game = GameLoop::new(hamlet());
    let json = snapshot(&game);
    for _ in 0..5 {
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_string(&restored).unwrap(), json);
    }
}
