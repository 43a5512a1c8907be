//! Day and night
//!
//! A day is four phases of configurable length. Every turn advances the
//! clock by one tick; the phase is derived from the tick within the day.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::TimeCycleConfig;

/// Phase of the day, in order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Phase {
    Dawn = 0,
    Daytime = 1,
    Dusk = 2,
    Nighttime = 3,
}

impl Phase {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name shown to the player
    pub const fn display_name(self) -> &'static str {
        match self {
            Phase::Dawn => "Dawn",
            Phase::Daytime => "Day",
            Phase::Dusk => "Evening",
            Phase::Nighttime => "Night",
        }
    }
}

/// Game clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCycle {
    phase_ticks: [u32; 4],
    tick_global: u64,
    tick_day: u32,
    tick_phase: u32,
    phase: Phase,
}

impl Default for TimeCycle {
    fn default() -> Self {
        Self::new(&TimeCycleConfig::default())
    }
}

impl TimeCycle {
    pub fn new(config: &TimeCycleConfig) -> Self {
        let mut cycle = Self {
            phase_ticks: config.as_array(),
            tick_global: 0,
            tick_day: 0,
            tick_phase: 0,
            phase: Phase::Dawn,
        };
        cycle.phase = cycle.phase_at(0);
        cycle
    }

    /// Ticks in a whole day
    pub fn units_in_day(&self) -> u32 {
        self.phase_ticks.iter().sum()
    }

    /// Phase containing a given tick of the day; empty phases are skipped
    fn phase_at(&self, tick_day: u32) -> Phase {
        let mut boundary = 0;
        for (phase, ticks) in Phase::iter().zip(self.phase_ticks) {
            boundary += ticks;
            if tick_day < boundary {
                return phase;
            }
        }
        Phase::Nighttime
    }

    /// Advance the clock one tick
    pub fn tick(&mut self) {
        let units = self.units_in_day().max(1);
        self.tick_global += 1;
        self.tick_day = (self.tick_day + 1) % units;

        let phase = self.phase_at(self.tick_day);
        if phase == self.phase && self.tick_day != 0 {
            self.tick_phase += 1;
        } else {
            if phase != self.phase {
                tracing::debug!(from = %self.phase, to = %phase, day = self.day(), "phase change");
            }
            self.phase = phase;
            self.tick_phase = 0;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_index(&self) -> usize {
        self.phase.index()
    }

    /// Lowercase phase name, e.g. "nighttime"
    pub fn phase_name(&self) -> String {
        self.phase.to_string()
    }

    pub fn display_name(&self) -> &'static str {
        self.phase.display_name()
    }

    pub fn tick_global(&self) -> u64 {
        self.tick_global
    }

    pub fn tick_day(&self) -> u32 {
        self.tick_day
    }

    /// Ticks spent so far in the current phase
    pub fn tick_phase(&self) -> u32 {
        self.tick_phase
    }

    /// Length of the current phase
    pub fn phase_ticks(&self) -> u32 {
        self.phase_ticks[self.phase.index()]
    }

    pub fn remaining_phase_ticks(&self) -> u32 {
        self.phase_ticks().saturating_sub(self.tick_phase)
    }

    /// Whole days elapsed
    pub fn day(&self) -> u64 {
        self.tick_global / u64::from(self.units_in_day().max(1))
    }
}
