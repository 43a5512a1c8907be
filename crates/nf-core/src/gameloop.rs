//! Main game loop
//!
//! One call to [`GameLoop::tick`] is one turn: the player acts, the clock
//! advances, every other living actor with a strategy gets its move in
//! spawn order, and the player's view is recomputed.

use nf_rng::GameRng;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::actor::ActorId;
use crate::ai::{Ai, Behavior, Transition};
use crate::error::Impossible;
use crate::world::World;

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
}

/// Messages for the player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    /// Messages for the current turn
    current: Vec<String>,
    /// Permanent message history
    history: Vec<String>,
}

impl MessageLog {
    pub fn add(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::trace!(%msg, "message");
        self.current.push(msg.clone());
        self.history.push(msg);
    }

    pub fn current(&self) -> &[String] {
        &self.current
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clear_current(&mut self) {
        self.current.clear();
    }
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: World,

    /// Random number generator
    pub rng: GameRng,

    /// Turn counter
    pub turns: u64,

    #[serde(skip)]
    pub messages: MessageLog,
}

impl GameState {
    pub fn new(world: World, rng: GameRng) -> Self {
        Self {
            world,
            rng,
            turns: 0,
            messages: MessageLog::default(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.add(msg);
    }
}

/// Game loop controller
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        let mut game = Self { state };
        game.state.world.update_fov();
        game
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Execute one turn.
    ///
    /// If the player's action is impossible the reason goes to the message
    /// log, nothing else happens and the turn is not used up.
    pub fn tick(&mut self, action: Action) -> Result<TurnResult, Impossible> {
        self.state.messages.clear_current();
        let player = self.state.world.player;
        if !self.state.world.player_alive() {
            return Err(Impossible::ActorGone);
        }

        let GameState {
            world,
            rng,
            messages,
            ..
        } = &mut self.state;
        if let Err(reason) = action.perform(player, world, rng, messages) {
            messages.add(reason.to_string());
            return Err(reason);
        }

        world.time.tick();
        world.update_fov_radius();
        self.run_ai();
        self.state.world.update_fov();
        self.state.turns += 1;

        if self.state.world.player_alive() {
            Ok(TurnResult::Continue)
        } else {
            Ok(TurnResult::PlayerDied("You died!".to_string()))
        }
    }

    /// Let every living non-player actor with a strategy take its turn
    fn run_ai(&mut self) {
        let GameState {
            world,
            rng,
            messages,
            ..
        } = &mut self.state;

        for id in world.actors.ids() {
            if id == world.player {
                continue;
            }
            let Some(mut ai) = world
                .actors
                .get_mut(id)
                .filter(|a| a.is_alive())
                .and_then(|a| a.ai.take())
            else {
                continue;
            };

            let decision = match world.actors.get(id) {
                Some(me) => ai.decide(me, world, rng),
                None => continue,
            };
            put_back(world, id, ai, decision.transition, messages);

            if let Err(reason) = decision.action.perform(id, world, rng, messages) {
                tracing::debug!(actor = ?id, %reason, "AI action failed");
            }
        }
    }
}

/// Return a strategy to its actor after it has decided
fn put_back(
    world: &mut World,
    id: ActorId,
    ai: Ai,
    transition: Transition,
    messages: &mut MessageLog,
) {
    let Some(actor) = world.actors.get_mut(id) else {
        return;
    };
    let ai = match transition {
        Transition::Stay => ai,
        Transition::Restore => {
            if ai.is_confused() {
                messages.add(format!("The {} is no longer confused.", actor.name));
            }
            ai.restore_previous()
        }
    };
    actor.ai = Some(ai);
}
