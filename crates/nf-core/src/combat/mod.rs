//! Combat system
//!
//! One melee exchange between two actors: engagement bookkeeping, attack
//! selection, the skill contest, damage and kill credit. The resolver
//! returns a structured [`AttackOutcome`]; turning it into text is up to
//! the caller.
//!
//! Random draws are made in a fixed order so a scripted source can replay
//! an exchange exactly: attack choice (weapon attack, or attacking part then
//! innate attack), target part, attacker's skill draw, defender's skill
//! draw, and on a hit the damage bonus draw.

mod attack;

use nf_rng::RandomSource;

use crate::actor::{Actor, ActorId, Actors};
use crate::ai::Ai;
use crate::config::CombatConfig;

pub use attack::{Attack, innate_attacks};

/// Result of one landed-or-missed swing
#[derive(Debug, Clone, PartialEq)]
pub struct Strike {
    pub attacker: ActorId,
    pub target: ActorId,
    /// Slot key of the part aimed at
    pub target_part: String,
    /// Display name of the part aimed at
    pub part_name: String,
    pub attack: Attack,
    pub hit: bool,
    /// HP actually removed (0 on a miss)
    pub damage: u32,
    pub target_died: bool,
}

/// What a call to [`resolve_attack`] did
#[derive(Debug, Clone, PartialEq)]
pub enum AttackOutcome {
    /// One side was missing or already dead; nothing happened
    Skipped,
    /// The attacker has no body part left to attack with
    Unable { attacker: ActorId },
    Strike(Strike),
}

impl AttackOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Strike(s) if s.hit)
    }

    pub fn target_died(&self) -> bool {
        matches!(self, AttackOutcome::Strike(s) if s.target_died)
    }
}

/// Put a non-player actor into combat against `opponent` unless it is already fighting
fn engage(actor: &mut Actor, opponent: ActorId) {
    if actor.is_player || actor.ai.as_ref().is_some_and(Ai::is_engaged) {
        return;
    }
    tracing::debug!(actor = %actor.name, ?opponent, "engaging in combat");
    let previous = actor.ai.take();
    actor.ai = Some(Ai::engage(opponent, previous));
}

/// Leave combat, going back to whatever the actor did before
fn disengage(actor: &mut Actor) {
    if let Some(ai) = actor.ai.take() {
        if ai.is_engaged() {
            tracing::debug!(actor = %actor.name, "returning to previous behavior");
            actor.ai = Some(ai.restore_previous());
        } else {
            actor.ai = Some(ai);
        }
    }
}

fn choose_attack<R: RandomSource>(attacker: &Actor, rng: &mut R) -> Option<Attack> {
    if let Some(weapon) = attacker.equipment.weapon() {
        let attacks = weapon
            .equippable
            .as_ref()
            .map(|e| e.attacks.as_slice())
            .unwrap_or_default();
        if let Some(attack) = rng.choose(attacks) {
            return Some(attack.clone());
        }
    }

    let parts = attacker.body.usable_parts();
    let part = rng.choose(&parts)?;
    let attacks = innate_attacks(part.part_type);
    rng.choose(&attacks).cloned()
}

/// Resolve one melee attack of `attacker_id` on `target_id`.
///
/// Engages both sides (non-players only), picks an attack and a target
/// part, runs the skill contest and applies damage. A kill credits the
/// attacker's deeds and returns it to its pre-combat behavior.
pub fn resolve_attack<R: RandomSource>(
    actors: &mut Actors,
    attacker_id: ActorId,
    target_id: ActorId,
    config: &CombatConfig,
    rng: &mut R,
) -> AttackOutcome {
    let Some((attacker, target)) = actors.pair_mut(attacker_id, target_id) else {
        return AttackOutcome::Skipped;
    };
    if !attacker.is_alive() || !target.is_alive() {
        return AttackOutcome::Skipped;
    }

    engage(attacker, target_id);
    engage(target, attacker_id);

    if attacker.body.usable_parts().is_empty() {
        return AttackOutcome::Unable {
            attacker: attacker_id,
        };
    }
    let Some(attack) = choose_attack(attacker, rng) else {
        return AttackOutcome::Unable {
            attacker: attacker_id,
        };
    };

    let (target_part, part_name) = {
        let parts = target.body.targetable_parts();
        match rng.choose(&parts) {
            Some(part) => (part.slot.clone(), part.name.clone()),
            None => return AttackOutcome::Skipped,
        }
    };

    let attacker_skill = attacker.skills.fighting_level();
    let attacker_draw = rng.roll(attacker_skill);
    let defender_draw = rng.roll(target.skills.fighting_level());
    let mut strike = Strike {
        attacker: attacker_id,
        target: target_id,
        target_part,
        part_name,
        attack,
        hit: attacker_draw > defender_draw,
        damage: 0,
        target_died: false,
    };
    if !strike.hit {
        tracing::trace!(
            attacker = %attacker.name,
            target = %target.name,
            attacker_draw,
            defender_draw,
            "attack missed"
        );
        return AttackOutcome::Strike(strike);
    }

    let bonus = rng.roll(attacker_skill);
    let total = i64::from(strike.attack.damage)
        + i64::from(bonus)
        + i64::from(attacker.power_bonus());
    let total = u32::try_from(total.max(0)).unwrap_or(u32::MAX);

    if let Some(report) = target.take_damage(&strike.target_part, total) {
        strike.damage = report.dealt;
    }
    attacker.skills.gain_fighting(config.skill_gain);

    if !target.is_alive() {
        strike.target_died = true;
        attacker.deeds.record_kill(target.evil);
        tracing::debug!(attacker = %attacker.name, ?target_id, "kill");
        disengage(attacker);
    }

    AttackOutcome::Strike(strike)
}
