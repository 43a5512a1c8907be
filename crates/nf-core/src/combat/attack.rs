//! Attacks and the innate attack table

use serde::{Deserialize, Serialize};

use crate::body::BodyPartType;

/// A named way of hitting something
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Base damage before skill and equipment
    pub damage: u32,
    /// Body part type delivering an innate attack; `None` for weapon attacks
    pub part_type: Option<BodyPartType>,
}

impl Attack {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            part_type: None,
        }
    }

    /// An unarmed attack delivered by a part of the given type
    pub fn innate(part_type: BodyPartType, name: impl Into<String>, damage: u32) -> Self {
        Self {
            part_type: Some(part_type),
            ..Self::new(name, damage)
        }
    }
}

/// Unarmed attacks a body part of this type can make
pub fn innate_attacks(part_type: BodyPartType) -> Vec<Attack> {
    let table: &[(&str, u32)] = match part_type {
        BodyPartType::Arm => &[("punch", 5), ("elbow", 3)],
        BodyPartType::Leg => &[("kick", 6), ("knee", 4)],
        BodyPartType::Head => &[("headbutt", 4)],
        BodyPartType::Tail => &[("tail lash", 5)],
        BodyPartType::Torso => &[],
    };
    table
        .iter()
        .map(|&(name, damage)| Attack::innate(part_type, name, damage))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_arm_attacks() {
        let attacks = innate_attacks(BodyPartType::Arm);
        assert_eq!(attacks.len(), 2);
        assert_eq!(attacks[0].name, "punch");
        assert_eq!(attacks[0].damage, 5);
        assert_eq!(attacks[0].part_type, Some(BodyPartType::Arm));
    }

    #[test]
    fn test_torso_cannot_strike() {
        assert!(innate_attacks(BodyPartType::Torso).is_empty());
    }

    #[test]
    fn test_every_limb_type_has_an_attack() {
        for part_type in BodyPartType::iter().filter(|t| *t != BodyPartType::Torso) {
            assert!(!innate_attacks(part_type).is_empty(), "{part_type}");
        }
    }

    #[test]
    fn test_weapon_attack_has_no_part() {
        assert_eq!(Attack::new("slash", 6).part_type, None);
    }
}
