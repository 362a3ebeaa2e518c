//! Player intents and how each one changes the game state.
//!
//! An [`Action`] is what the runtime receives from the player. Each variant
//! maps to a transition type implementing [`ActionTransition`]; the engine
//! drives it through `pre_validate` (soft rejections, no mutation) and then
//! `apply`.
//!
//! # Module Structure
//!
//! - `error`: rejection reasons ([`ActionError`])
//! - `movement`: [`MoveAction`] and [`CardinalDirection`]
//! - `combat`: [`AttackAction`] and [`UseAbilityAction`]

mod combat;
mod error;
mod movement;

pub use combat::{AttackAction, AttackResult, UseAbilityAction};
pub use error::ActionError;
pub use movement::{CardinalDirection, MoveAction, MoveResult};

use crate::combat::AbilityOutcome;
use crate::env::GameEnv;
use crate::state::{GameState, Player};

/// Defines how a concrete action variant mutates game state.
///
/// Implementors must keep `pre_validate` side-effect free: a rejected action
/// leaves the state exactly as it was. `apply` may assume `pre_validate`
/// succeeded and appends player-facing log lines as it goes.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        log: &mut Vec<String>,
    ) -> Result<Self::Result, Self::Error>;
}

/// A player intent for the hero whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(CardinalDirection),
    Attack,
    /// Zero-based ability slot.
    UseAbility(usize),
}

impl Action {
    /// Short name used in logs and traces.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::Move(_) => "move",
            Self::Attack => "attack",
            Self::UseAbility(_) => "use_ability",
        }
    }
}

impl From<CardinalDirection> for Action {
    fn from(direction: CardinalDirection) -> Self {
        Self::Move(direction)
    }
}

/// Action-specific result of a successful transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move(MoveResult),
    Attack(AttackResult),
    Ability(AbilityOutcome),
}

impl ActionResult {
    /// True when the acting hero died during the action.
    pub fn actor_defeated(&self) -> bool {
        matches!(
            self,
            Self::Attack(AttackResult {
                attacker_defeated: true,
                ..
            })
        )
    }

    /// New depth when the action took the party down a level.
    pub fn descended_to(&self) -> Option<u32> {
        match self {
            Self::Move(result) => result.descended_to,
            _ => None,
        }
    }
}

/// The hero whose turn it is, as long as the game is still running.
pub(crate) fn acting_player(state: &GameState) -> Result<&Player, ActionError> {
    if state.is_game_over {
        return Err(ActionError::GameOver);
    }
    let index = state.turn.current_player_index;
    state
        .current_player()
        .ok_or(ActionError::NoCurrentPlayer { index })
}
