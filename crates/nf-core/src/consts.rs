//! Core simulation constants

/// Fighting skill gained each time an actor lands an attack
pub const FIGHTING_SKILL_GAIN: f32 = 0.025;

/// Starting fighting skill for a fresh actor
pub const BASE_FIGHTING_SKILL: f32 = 10.0;

/// FOV radius at night, and the floor dusk narrows to
pub const NIGHT_FOV_RADIUS: i32 = 4;

/// Chebyshev distance at which actors can melee
pub const MELEE_RANGE: i32 = 1;

/// Inventory size of actors that don't specify one
pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;

/// The eight compass directions (dx, dy)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // Northwest
    (0, -1),  // North
    (1, -1),  // Northeast
    (-1, 0),  // West
    (1, 0),   // East
    (-1, 1),  // Southwest
    (0, 1),   // South
    (1, 1),   // Southeast
];
