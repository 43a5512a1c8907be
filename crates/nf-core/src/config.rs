//! Game configuration
//!
//! Loaded from a JSON file shaped like:
//!
//! ```json
//! { "map": { "width": 80, "height": 43 },
//!   "time_cycles": { "phase_ticks_dawn": 20, "phase_ticks_daytime": 100,
//!                    "phase_ticks_dusk": 20, "phase_ticks_nighttime": 60 } }
//! ```
//!
//! Every section and field is optional and falls back to its default.

#[cfg(feature = "std")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on a single step's cost
pub const MAX_STEP_COST: u32 = 1_000;

/// Upper bound on the extra cost of a tile holding a blocking actor
pub const MAX_BLOCKER_PENALTY: u32 = 100_000;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map: MapConfig,
    pub time_cycles: TimeCycleConfig,
    pub fov: FovConfig,
    pub combat: CombatConfig,
    pub pathing: PathConfig,
    pub hunter: HunterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 43,
        }
    }
}

/// Ticks spent in each phase of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeCycleConfig {
    pub phase_ticks_dawn: u32,
    pub phase_ticks_daytime: u32,
    pub phase_ticks_dusk: u32,
    pub phase_ticks_nighttime: u32,
}

impl Default for TimeCycleConfig {
    fn default() -> Self {
        Self {
            phase_ticks_dawn: 20,
            phase_ticks_daytime: 100,
            phase_ticks_dusk: 20,
            phase_ticks_nighttime: 60,
        }
    }
}

impl TimeCycleConfig {
    /// Phase lengths in order: dawn, daytime, dusk, nighttime
    pub fn as_array(&self) -> [u32; 4] {
        [
            self.phase_ticks_dawn,
            self.phase_ticks_daytime,
            self.phase_ticks_dusk,
            self.phase_ticks_nighttime,
        ]
    }
}

/// Field of view radius band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FovConfig {
    /// Night radius; dusk never narrows below it
    pub min_radius: i32,
    /// Full daylight radius. `None` means half the map height.
    pub max_radius: Option<i32>,
    /// Radius at the start of a game
    pub initial_radius: i32,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            min_radius: crate::NIGHT_FOV_RADIUS,
            max_radius: None,
            initial_radius: crate::NIGHT_FOV_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Fighting skill gained per landed attack
    pub skill_gain: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            skill_gain: crate::FIGHTING_SKILL_GAIN,
        }
    }
}

/// Movement costs used by the pathfinder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Extra cost of a tile occupied by a blocking actor.
    /// Low values make actors queue in corridors, high values make them
    /// take long detours around each other.
    pub blocker_penalty: u32,
    pub cardinal_cost: u32,
    pub diagonal_cost: u32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            blocker_penalty: 10,
            cardinal_cost: 2,
            diagonal_cost: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    /// Whole days a hunter rests after a kill
    pub cooldown_days: u32,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self { cooldown_days: 3 }
    }
}

impl GameConfig {
    /// Parse a config from JSON text and validate it
    #[cfg(feature = "std")]
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    #[cfg(feature = "std")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Daylight FOV radius after applying the map-height fallback
    pub fn max_fov_radius(&self) -> i32 {
        self.fov
            .max_radius
            .unwrap_or(i32::from(self.map.height) / 2)
    }

    /// Check configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.width == 0 || self.map.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "map must not be empty ({}x{})",
                self.map.width, self.map.height
            )));
        }

        if self.time_cycles.as_array().iter().sum::<u32>() == 0 {
            return Err(ConfigError::Invalid(
                "a day needs at least one tick".into(),
            ));
        }

        if self.fov.min_radius < 0 || self.fov.min_radius > self.max_fov_radius() {
            return Err(ConfigError::Invalid(format!(
                "fov.min_radius ({}) must be between 0 and max radius ({})",
                self.fov.min_radius,
                self.max_fov_radius()
            )));
        }

        let pathing = &self.pathing;
        if pathing.cardinal_cost == 0 || pathing.diagonal_cost == 0 {
            return Err(ConfigError::Invalid("path costs must be positive".into()));
        }
        if pathing.cardinal_cost > MAX_STEP_COST || pathing.diagonal_cost > MAX_STEP_COST {
            return Err(ConfigError::Invalid(format!(
                "path costs must be at most {MAX_STEP_COST}"
            )));
        }
        if pathing.blocker_penalty > MAX_BLOCKER_PENALTY {
            return Err(ConfigError::Invalid(format!(
                "pathing.blocker_penalty ({}) must be at most {MAX_BLOCKER_PENALTY}",
                pathing.blocker_penalty
            )));
        }

        Ok(())
    }
}
