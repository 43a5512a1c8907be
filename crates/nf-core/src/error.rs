//! Error types
//!
//! `Impossible` is the expected, recoverable failure of an action: the
//! player is told why and keeps the turn, an AI actor silently loses it.

use thiserror::Error;

/// An action that cannot be carried out right now
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Impossible {
    #[error("That way is blocked.")]
    Blocked,

    #[error("That way is blocked by something.")]
    BlockedByActor,

    #[error("You can't go off the edge of the world.")]
    OutOfBounds,

    #[error("Nothing to attack.")]
    NothingToAttack,

    #[error("There is nothing here to pick up.")]
    NothingToPickUp,

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("You don't have that item.")]
    NoSuchItem,

    #[error("You can't equip the {0}.")]
    NotEquippable(String),

    #[error("You can't use the {0}.")]
    NotUsable(String),

    #[error("Your health is already full.")]
    AlreadyHealthy,

    #[error("There is no one there.")]
    NoTarget,

    #[error("That is too far away.")]
    OutOfReach,

    #[error("You can't act any more.")]
    ActorGone,
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[cfg(feature = "std")]
    #[error("Could not read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impossible_messages_are_user_facing() {
        assert_eq!(Impossible::Blocked.to_string(), "That way is blocked.");
        assert_eq!(
            Impossible::NotEquippable("Potion".into()).to_string(),
            "You can't equip the Potion."
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
