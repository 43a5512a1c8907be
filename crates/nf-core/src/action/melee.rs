//! Melee attacks

use nf_rng::RandomSource;

use crate::MELEE_RANGE;
use crate::actor::ActorId;
use crate::combat::{AttackOutcome, resolve_attack};
use crate::error::Impossible;
use crate::gameloop::MessageLog;
use crate::world::World;

/// Attack whoever stands on the adjacent tile
pub(super) fn melee<R: RandomSource>(
    actor: ActorId,
    dx: i32,
    dy: i32,
    world: &mut World,
    rng: &mut R,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    let from = world.actors.get(actor).ok_or(Impossible::ActorGone)?.pos;
    let target = world
        .actors
        .actor_at(from.offset(dx, dy))
        .map(|a| a.id)
        .filter(|&id| id != actor)
        .ok_or(Impossible::NothingToAttack)?;
    attack(actor, target, world, rng, log)
}

/// Attack a particular actor
pub(super) fn attack<R: RandomSource>(
    actor: ActorId,
    target: ActorId,
    world: &mut World,
    rng: &mut R,
    log: &mut MessageLog,
) -> Result<(), Impossible> {
    if actor == target || !world.actors.is_alive(target) {
        return Err(Impossible::NoTarget);
    }
    let (attacker_name, target_name, target_is_player) = {
        let a = world.actors.get(actor).ok_or(Impossible::ActorGone)?;
        let t = world.actors.get(target).ok_or(Impossible::NoTarget)?;
        if a.pos.distance(t.pos) > MELEE_RANGE {
            return Err(Impossible::OutOfReach);
        }
        (a.name.clone(), t.name.clone(), t.is_player)
    };

    let outcome = resolve_attack(&mut world.actors, actor, target, &world.config.combat, rng);
    for line in describe_outcome(&outcome, &attacker_name, &target_name, target_is_player) {
        log.add(line);
    }
    Ok(())
}

/// Message log lines for an attack
pub fn describe_outcome(
    outcome: &AttackOutcome,
    attacker: &str,
    target: &str,
    target_is_player: bool,
) -> Vec<String> {
    match outcome {
        AttackOutcome::Skipped => Vec::new(),
        AttackOutcome::Unable { .. } => {
            vec![format!("{attacker} tries to attack, but is unable!")]
        }
        AttackOutcome::Strike(strike) if !strike.hit => vec![format!(
            "{attacker} attacks {target}'s {} with {}, but misses.",
            strike.part_name, strike.attack.name
        )],
        AttackOutcome::Strike(strike) => {
            let mut lines = vec![format!(
                "{attacker} attacks {target}'s {} with {} for {} damage.",
                strike.part_name, strike.attack.name, strike.damage
            )];
            if strike.target_died {
                if target_is_player {
                    lines.push("You died!".to_string());
                } else {
                    lines.push(format!("{target} is dead!"));
                }
            }
            lines
        }
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
        let orc = world.spawn(templates::ORC.build(Position::new(2, 2)));
        (world, player, orc)
    }

    #[test]
    fn test_melee_empty_tile() {
        let (mut world, player, _) = world();
        let result = melee(
            player,
            0,
            1,
            &mut world,
            &mut ScriptedRng::default(),
            &mut MessageLog::default(),
        );
        assert_eq!(result, Err(Impossible::NothingToAttack));
    }

    #[test]
    fn test_melee_hit_is_logged() {
        let (mut world, player, _) = world();
        let mut log = MessageLog::default();
        // left arm, punch, head, 5 vs 0, bonus 0
        let mut rng = ScriptedRng::new([0, 0, 0, 5, 0, 0]);
        melee(player, 1, 1, &mut world, &mut rng, &mut log).unwrap();
        assert_eq!(log.current(), ["Player attacks Orc's Head with punch for 5 damage."]);
    }

    #[test]
    fn test_miss_is_logged() {
        let (mut world, player, _) = world();
        let mut log = MessageLog::default();
        let mut rng = ScriptedRng::new([0, 0, 0, 0, 5]);
        melee(player, 1, 1, &mut world, &mut rng, &mut log).unwrap();
        assert_eq!(log.current(), ["Player attacks Orc's Head with punch, but misses."]);
    }

    #[test]
    fn test_attack_dead_target() {
        let (mut world, player, orc) = world();
        world.actors.get_mut(orc).unwrap().die();
        let result = attack(
            player,
            orc,
            &mut world,
            &mut ScriptedRng::default(),
            &mut MessageLog::default(),
        );
        assert_eq!(result, Err(Impossible::NoTarget));
    }

    #[test]
    fn test_attack_out_of_reach() {
        let (mut world, player, orc) = world();
        world.actors.get_mut(orc).unwrap().pos = Position::new(8, 8);
        let result = attack(
            player,
            orc,
            &mut world,
            &mut ScriptedRng::default(),
            &mut MessageLog::default(),
        );
        assert_eq!(result, Err(Impossible::OutOfReach));
        let orc = world.actors.get(orc).unwrap();
        assert!(!orc.ai.as_ref().unwrap().is_engaged());
        assert_eq!(orc.body.current_hp(), orc.body.total_hp());
    }

    #[test]
    fn test_attack_diagonal_neighbour() {
        let (mut world, player, orc) = world();
        let mut log = MessageLog::default();
        let mut rng = ScriptedRng::new([0, 0, 0, 0, 5]);
        attack(player, orc, &mut world, &mut rng, &mut log).unwrap();
        assert_eq!(log.current(), ["Player attacks Orc's Head with punch, but misses."]);
    }

    #[test]
    fn test_death_lines() {
        let outcome = AttackOutcome::Strike(crate::combat::Strike {
            attacker: ActorId(1),
            target: ActorId(2),
            target_part: "head".into(),
            part_name: "Head".into(),
            attack: crate::combat::Attack::new("slash", 20),
            hit: true,
            damage: 20,
            target_died: true,
        });
        let lines = describe_outcome(&outcome, "Orc", "Player", true);
        assert_eq!(lines.last().unwrap(), "You died!");
        let lines = describe_outcome(&outcome, "Player", "Orc", false);
        assert_eq!(lines.last().unwrap(), "Orc is dead!");
    }
}
