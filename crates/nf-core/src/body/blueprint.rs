//! Immutable body blueprints
//!
//! A blueprint is static data. Each actor gets its own [`Body`] built from
//! one, so no two bodies ever share part state.

use super::{Body, BodyPart, BodyPartType, PartFlags};

/// One part of a blueprint
#[derive(Debug, Clone, Copy)]
pub struct PartSpec {
    pub slot: &'static str,
    pub name: &'static str,
    pub part_type: BodyPartType,
    pub hp: u32,
    pub flags: PartFlags,
}

impl PartSpec {
    const fn new(
        slot: &'static str,
        name: &'static str,
        part_type: BodyPartType,
        hp: u32,
        flags: PartFlags,
    ) -> Self {
        Self {
            slot,
            name,
            part_type,
            hp,
            flags,
        }
    }
}

/// Body layout for a family of creatures
#[derive(Debug, Clone, Copy)]
pub struct BodyBlueprint {
    pub name: &'static str,
    pub parts: &'static [PartSpec],
}

impl BodyBlueprint {
    /// Build a fresh body at full health
    pub fn instantiate(&self) -> Body {
        Body::new(
            self.parts
                .iter()
                .map(|p| BodyPart::new(p.slot, p.name, p.part_type, p.hp, p.flags))
                .collect(),
        )
    }

    /// Blueprint for a race name; unknown races are humanoid
    pub fn for_race(race: &str) -> &'static BodyBlueprint {
        match race {
            "wolf" | "dog" | "beast" => &BEAST,
            _ => &HUMANOID,
        }
    }
}

pub static HUMANOID: BodyBlueprint = BodyBlueprint {
    name: "humanoid",
    parts: &[
        PartSpec::new("head", "Head", BodyPartType::Head, 20, PartFlags::LETHAL),
        PartSpec::new("torso", "Torso", BodyPartType::Torso, 30, PartFlags::LETHAL),
        PartSpec::new("left_arm", "Left Arm", BodyPartType::Arm, 10, PartFlags::ATTACKS),
        PartSpec::new("right_arm", "Right Arm", BodyPartType::Arm, 10, PartFlags::ATTACKS),
        PartSpec::new("left_leg", "Left Leg", BodyPartType::Leg, 20, PartFlags::ATTACKS),
        PartSpec::new("right_leg", "Right Leg", BodyPartType::Leg, 20, PartFlags::ATTACKS),
    ],
};

pub static BEAST: BodyBlueprint = BodyBlueprint {
    name: "beast",
    parts: &[
        PartSpec::new("head", "Head", BodyPartType::Head, 15, PartFlags::LETHAL.union(PartFlags::ATTACKS)),
        PartSpec::new("torso", "Torso", BodyPartType::Torso, 25, PartFlags::LETHAL),
        PartSpec::new("front_left_leg", "Front Left Leg", BodyPartType::Leg, 10, PartFlags::ATTACKS),
        PartSpec::new("front_right_leg", "Front Right Leg", BodyPartType::Leg, 10, PartFlags::ATTACKS),
        PartSpec::new("hind_left_leg", "Hind Left Leg", BodyPartType::Leg, 10, PartFlags::empty()),
        PartSpec::new("hind_right_leg", "Hind Right Leg", BodyPartType::Leg, 10, PartFlags::empty()),
        PartSpec::new("tail", "Tail", BodyPartType::Tail, 5, PartFlags::ATTACKS),
    ],
};
