//! nf-core: combat and actor simulation for the Nightfall roguelike
//!
//! Body-part-aware damage, equipment, skill-contest combat, strategy-based
//! actor AI, grid pathfinding and the per-turn engine that ties them
//! together. The crate has no rendering or input; callers drive it through
//! [`GameLoop::tick`] and read structured outcomes and the message log.
//!
//! All state is plain serde data reachable from [`GameState`], so a clone
//! or serialize round-trip continues identically.

pub mod action;
pub mod actor;
pub mod ai;
pub mod body;
pub mod combat;
pub mod config;
pub mod error;
pub mod object;
pub mod world;

mod consts;
mod gameloop;

pub use consts::*;
pub use gameloop::{GameLoop, GameState, MessageLog, TurnResult};
pub use nf_rng::{GameRng, RandomSource, ScriptedRng};
