//! Body model
//!
//! An actor's body is a fixed set of parts, each with independent hit
//! points. Totals are always derived from the parts. The body decides
//! whether a blow was fatal; carrying out the death is the actor's job.

mod blueprint;
mod part;

use serde::{Deserialize, Serialize};

pub use blueprint::{BEAST, BodyBlueprint, HUMANOID, PartSpec};
pub use part::{BodyPart, BodyPartType, EquipSlot, PartFlags};

/// What a single `take_damage` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    /// HP actually removed from the part
    pub dealt: u32,
    /// Part HP after the blow
    pub part_hp: u32,
    /// The owner should die: the whole body is at 0 HP, or a lethal part is
    pub fatal: bool,
}

/// Owned collection of body parts, keyed by slot name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    parts: Vec<BodyPart>,
}

impl Default for Body {
    fn default() -> Self {
        HUMANOID.instantiate()
    }
}

impl Body {
    pub fn new(parts: Vec<BodyPart>) -> Self {
        Self { parts }
    }

    /// Body for a race, humanoid unless the race says otherwise
    pub fn for_race(race: &str) -> Self {
        BodyBlueprint::for_race(race).instantiate()
    }

    pub fn parts(&self) -> &[BodyPart] {
        &self.parts
    }

    pub(crate) fn parts_mut(&mut self) -> &mut [BodyPart] {
        &mut self.parts
    }

    pub fn part(&self, slot: &str) -> Option<&BodyPart> {
        self.parts.iter().find(|p| p.slot == slot)
    }

    pub fn part_mut(&mut self, slot: &str) -> Option<&mut BodyPart> {
        self.parts.iter_mut().find(|p| p.slot == slot)
    }

    /// Sum of every part's maximum HP
    pub fn total_hp(&self) -> u32 {
        self.parts.iter().map(BodyPart::max_hp).sum()
    }

    /// Sum of every part's current HP
    pub fn current_hp(&self) -> u32 {
        self.parts.iter().map(BodyPart::hp).sum()
    }

    /// Parts that can still be struck
    pub fn targetable_parts(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.is_targetable()).collect()
    }

    /// Parts that can still attack
    pub fn usable_parts(&self) -> Vec<&BodyPart> {
        self.parts.iter().filter(|p| p.can_attack()).collect()
    }

    pub fn parts_of_type(&self, part_type: BodyPartType) -> impl Iterator<Item = &BodyPart> {
        self.parts.iter().filter(move |p| p.part_type == part_type)
    }

    pub fn has_part_type(&self, part_type: BodyPartType) -> bool {
        self.parts_of_type(part_type).next().is_some()
    }

    /// Damage one part and report whether the blow was fatal.
    ///
    /// Returns `None` if the body has no such slot.
    pub fn take_damage(&mut self, slot: &str, amount: u32) -> Option<DamageReport> {
        let part = self.part_mut(slot)?;
        let dealt = part.take_damage(amount);
        let part_hp = part.hp();
        let lethal_part_lost = part.is_lethal() && part_hp == 0;
        let fatal = lethal_part_lost || self.current_hp() == 0;
        Some(DamageReport {
            dealt,
            part_hp,
            fatal,
        })
    }

    /// Heal one part. Returns the amount recovered (0 for an unknown slot).
    pub fn heal(&mut self, slot: &str, amount: u32) -> u32 {
        self.part_mut(slot).map_or(0, |p| p.heal(amount))
    }

    /// Spread healing over damaged parts in slot order. Returns the total recovered.
    pub fn heal_all(&mut self, amount: u32) -> u32 {
        let mut left = amount;
        for part in &mut self.parts {
            if left == 0 {
                break;
            }
            left -= part.heal(left);
        }
        amount - left
    }

    pub fn is_full_health(&self) -> bool {
        self.current_hp() == self.total_hp()
    }
}
