use nf_rng::RandomSource;
use serde::{Deserialize, Serialize};

use super::{Behavior, Decision, random_bump};
use crate::actor::Actor;
use crate::world::World;

/// Bumps in a random direction every turn, attacking whatever is in the way
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wander;

impl Behavior for Wander {
    fn decide<R: RandomSource>(&mut self, _me: &Actor, _world: &World, rng: &mut R) -> Decision {
        Decision::act(random_bump(rng, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::world::Position;
    use nf_rng::ScriptedRng;

    #[test]
    fn test_direction_follows_draw() {
        let world = World::from_config(GameConfig::default());
        let me = Actor::new("Wolf", "wolf", Position::new(5, 5));
        let mut rng = ScriptedRng::new([4]);
        let decision = Wander.decide(&me, &world, &mut rng);
        assert_eq!(
            decision.action,
            Action::Bump {
                dx: 1,
                dy: 0,
                force_attack: true
            }
        );
    }
}
