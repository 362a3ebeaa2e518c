//! Action rejection errors.
//!
//! Every rejection is a soft failure: the engine logs the `Display` text and
//! the refused action changes nothing, so messages are written for players.
//! The actor still loses the turn unless the game is already over.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

/// Reasons an action is refused before it changes anything.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Every hero has fallen; nothing can act any more.
    #[error("The game is over.")]
    GameOver,

    /// The turn index does not point at a hero.
    #[error("no player at turn index {index}")]
    NoCurrentPlayer { index: usize },

    #[error("{name} is dead and cannot move!")]
    DeadCannotMove { name: String },

    #[error("{name} is dead and cannot act!")]
    DeadCannotAct { name: String },

    #[error("Can't move there - out of bounds!")]
    OutOfBounds { destination: Position },

    #[error("No enemy to attack here!")]
    NoEnemy,

    /// Slots are shown to players starting at 1.
    #[error("{name} has no ability {}!", .index + 1)]
    UnknownAbility { name: String, index: usize },

    #[error("{ability} is on cooldown for {remaining} more turns!")]
    OnCooldown { ability: String, remaining: u32 },
}

impl ActionError {
    /// Whether the actor's turn still closes after this rejection.
    ///
    /// A finished game and a broken turn index leave the state frozen.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Self::GameOver | Self::NoCurrentPlayer { .. })
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. } | Self::NoEnemy | Self::OnCooldown { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::GameOver
            | Self::DeadCannotMove { .. }
            | Self::DeadCannotAct { .. }
            | Self::UnknownAbility { .. } => ErrorSeverity::Validation,
            Self::NoCurrentPlayer { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GameOver => "ACTION_GAME_OVER",
            Self::NoCurrentPlayer { .. } => "ACTION_NO_CURRENT_PLAYER",
            Self::DeadCannotMove { .. } => "ACTION_DEAD_CANNOT_MOVE",
            Self::DeadCannotAct { .. } => "ACTION_DEAD_CANNOT_ACT",
            Self::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            Self::NoEnemy => "ACTION_NO_ENEMY",
            Self::UnknownAbility { .. } => "ACTION_UNKNOWN_ABILITY",
            Self::OnCooldown { .. } => "ACTION_ON_COOLDOWN",
        }
    }
}
