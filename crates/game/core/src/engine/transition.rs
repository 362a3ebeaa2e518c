//! Action transition dispatch and execution logic.

use crate::action::{
    Action, ActionResult, ActionTransition, AttackAction, MoveAction, UseAbilityAction,
};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the two-phase pipeline and returns its result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    log: &mut Vec<String>,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(state, env, log)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))
}

/// Routes an action to its transition and wraps the result in [`ActionResult`].
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
    log: &mut Vec<String>,
) -> Result<ActionResult, ExecuteError> {
    match *action {
        Action::Move(direction) => {
            let result = drive_transition(&MoveAction::new(direction), state, env, log)
                .map_err(ExecuteError::Move)?;
            Ok(ActionResult::Move(result))
        }
        Action::Attack => {
            let result = drive_transition(&AttackAction::new(), state, env, log)
                .map_err(ExecuteError::Attack)?;
            Ok(ActionResult::Attack(result))
        }
        Action::UseAbility(index) => {
            let outcome = drive_transition(&UseAbilityAction::new(index), state, env, log)
                .map_err(ExecuteError::UseAbility)?;
            Ok(ActionResult::Ability(outcome))
        }
    }
}
