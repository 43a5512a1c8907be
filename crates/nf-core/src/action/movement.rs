//! Moving and bumping

use nf_rng::RandomSource;

use super::melee;
use crate::actor::ActorId;
use crate::error::Impossible;
use crate::gameloop::MessageLog;
use crate::world::World;

/// Step onto an adjacent tile
pub(super) fn step(actor: ActorId, dx: i32, dy: i32, world: &mut World) -> Result<(), Impossible> {
    let from = world.actors.get(actor).ok_or(Impossible::ActorGone)?.pos;
    let dest = from.offset(dx, dy);

    if !world.map.in_bounds(dest) {
        return Err(Impossible::OutOfBounds);
    }
    if !world.map.is_walkable(dest) {
        return Err(Impossible::Blocked);
    }
    if world.actors.blocking_at(dest).is_some() {
        return Err(Impossible::BlockedByActor);
    }

    if let Some(a) = world.actors.get_mut(actor) {
        a.pos = dest;
    }
    Ok(())
}

/// Move, or deal with whoever stands in the way
pub(super) fn bump<R: RandomSource>(
    actor: ActorId,
    dx: i32,
    dy: i32,
    force_attack: bool,
    world: &mut World,
    rng: &mut R,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    let from = world.actors.get(actor).ok_or(Impossible::ActorGone)?.pos;
    let dest = from.offset(dx, dy);

    match world.actors.actor_at(dest).map(|a| a.id) {
        Some(other) if other != actor => {
            if force_attack {
                melee::attack(actor, other, world, rng, log)
            } else {
                Ok(())
            }
        }
        _ => step(actor, dx, dy, world),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::templates;
    use crate::config::GameConfig;
    use crate::world::Position;
    use nf_rng::ScriptedRng;

    fn world() -> (World, ActorId, ActorId) {
        let mut config = GameConfig::default();
        config.map.width = 10;
        config.map.height = 10;
        let mut world = World::from_config(config);
        let player = world.spawn(templates::PLAYER.build(Position::new(1, 1)));
        let villager = world.spawn(templates::VILLAGER.build(Position::new(2, 1)));
        (world, player, villager)
    }

    #[test]
    fn test_step_into_wall() {
        let (mut world, player, _) = world();
        assert_eq!(step(player, -1, 0, &mut world), Err(Impossible::Blocked));
        assert_eq!(world.actors.get(player).unwrap().pos, Position::new(1, 1));
    }

    #[test]
    fn test_step_off_map() {
        let (mut world, player, _) = world();
        world.actors.get_mut(player).unwrap().pos = Position::new(0, 0);
        assert_eq!(step(player, -1, -1, &mut world), Err(Impossible::OutOfBounds));
    }

    #[test]
    fn test_step_into_actor() {
        let (mut world, player, _) = world();
        assert_eq!(step(player, 1, 0, &mut world), Err(Impossible::BlockedByActor));
    }

    #[test]
    fn test_step_onto_remains() {
        let (mut world, player, villager) = world();
        world.actors.get_mut(villager).unwrap().die();
        step(player, 1, 0, &mut world).unwrap();
        assert_eq!(world.actors.get(player).unwrap().pos, Position::new(2, 1));
    }

    #[test]
    fn test_gentle_bump_is_absorbed() {
        let (mut world, player, villager) = world();
        let mut log = MessageLog::default();
        let mut rng = ScriptedRng::default();
        bump(player, 1, 0, false, &mut world, &mut rng, &mut log).unwrap();
        assert_eq!(world.actors.get(player).unwrap().pos, Position::new(1, 1));
        assert!(world.actors.get(villager).unwrap().body.is_full_health());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_forced_bump_attacks() {
        let (mut world, player, villager) = world();
        let mut log = MessageLog::default();
        let mut rng = ScriptedRng::default();
        bump(player, 1, 0, true, &mut world, &mut rng, &mut log).unwrap();
        assert!(rng.consumed() > 0);
        assert!(world.actors.get(villager).unwrap().ai.as_ref().unwrap().is_engaged());
        assert!(!log.current().is_empty());
    }

    #[test]
    fn test_bump_into_empty_tile_moves() {
        let (mut world, player, _) = world();
        let mut log = MessageLog::default();
        bump(player, 0, 1, true, &mut world, &mut ScriptedRng::default(), &mut log).unwrap();
        assert_eq!(world.actors.get(player).unwrap().pos, Position::new(1, 2));
    }
}
