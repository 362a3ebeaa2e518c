//! Error types for the action execution pipeline.

use crate::action::{
    ActionError, ActionTransition, AttackAction, MoveAction, UseAbilityAction,
};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("attack action failed: {0}")]
    Attack(TransitionPhaseError<<AttackAction as ActionTransition>::Error>),

    #[error("ability action failed: {0}")]
    UseAbility(TransitionPhaseError<<UseAbilityAction as ActionTransition>::Error>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            Self::Move(inner) | Self::Attack(inner) | Self::UseAbility(inner) => inner,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    /// The underlying rejection; its `Display` is the player-facing message.
    pub fn action_error(&self) -> &ActionError {
        &self.inner().error
    }

    /// True for soft rejections raised before any mutation.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate
    }
}
