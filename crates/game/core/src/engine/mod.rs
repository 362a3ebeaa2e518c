//! Turn resolution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]: it runs
//! one action through its transition, settles deaths, and closes the turn.
//! [`apply`] wraps it as a pure function from one snapshot to the next, which
//! is what the runtime uses.

mod errors;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::GameState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result.
    pub action_result: ActionResult,

    /// Log lines produced by the action and the turn change, in order.
    pub log: Vec<String>,
}

/// Game engine that resolves actions against a borrowed state.
///
/// Every accepted action flows through the same pipeline:
/// pre_validate → apply → death check → end of turn.
///
/// A rejection in `pre_validate` changes nothing but still ends the turn,
/// unless the game is already over. An `apply` failure only happens on an
/// inconsistent state and may leave it partially updated; use [`apply`] when
/// atomicity matters.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action for the hero whose turn it is.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let mut log = Vec::new();

        let action_result = match transition::execute_transition(action, self.state, &env, &mut log)
        {
            Ok(result) => result,
            Err(error) => {
                if error.is_rejection() && error.action_error().ends_turn() {
                    self.end_turn();
                }
                return Err(error);
            }
        };

        if action_result.actor_defeated() {
            self.check_game_over(&mut log);
        }
        self.end_turn();

        Ok(ExecutionOutcome { action_result, log })
    }
}

/// Result of [`apply`]: the next snapshot and what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub state: GameState,

    /// Lines to append to the game log. A rejection yields exactly one.
    pub log: Vec<String>,

    pub result: Result<ActionResult, ExecuteError>,
}

impl Step {
    pub fn is_accepted(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolves `action` against `state` and returns the next snapshot.
///
/// The input is never modified. A rejected action does nothing itself and
/// adds a single explanatory log line, but the turn still passes to the next
/// hero. Once the game is over the snapshot comes back unchanged.
pub fn apply(state: &GameState, config: &GameConfig, action: &Action) -> Step {
    let mut next = state.clone();

    match GameEngine::new(&mut next).execute(GameEnv::new(config), action) {
        Ok(outcome) => Step {
            state: next,
            log: outcome.log,
            result: Ok(outcome.action_result),
        },
        Err(error) => Step {
            // a failed apply may have left `next` half-updated
            state: if error.is_rejection() {
                next
            } else {
                state.clone()
            },
            log: vec![error.action_error().to_string()],
            result: Err(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionError, CardinalDirection};
    use crate::state::{Item, Position, Tile, TileKind};
    use crate::testing::{game, hero, monster};

    fn config() -> GameConfig {
        GameConfig::with_board_size(3, 3)
    }

    fn place_enemy(state: &mut GameState, health: i32, attack: i32) {
        let position = Position::new(1, 1);
        state.board.set_tile(
            position,
            Tile::new(position, TileKind::Enemy).with_enemy(monster("Ogre", health, attack, 0)),
        );
    }

    #[test]
    fn rejection_changes_nothing_but_passes_the_turn() {
        let mut state = game(vec![hero("Aria", 100, 10, 5), hero("Bram", 90, 9, 6)]);
        state.players[0].position = Position::new(1, 0);
        state.players[0].abilities[1].current_cooldown = 2;

        let step = apply(&state, &config(), &Action::Move(CardinalDirection::North));

        assert_eq!(step.log, vec!["Can't move there - out of bounds!"]);
        let error = step.result.expect_err("rejected");
        assert!(error.is_rejection());
        assert!(matches!(error.action_error(), ActionError::OutOfBounds { .. }));

        assert_eq!(step.state.players[0].position, Position::new(1, 0));
        assert_eq!(step.state.board, state.board);
        assert_eq!(step.state.turn.current_player_index, 1);
        assert_eq!(step.state.players[0].abilities[1].current_cooldown, 1);
    }

    #[test]
    fn attacking_empty_air_passes_the_turn() {
        let state = game(vec![hero("Aria", 100, 10, 5), hero("Bram", 90, 9, 6)]);

        let step = apply(&state, &config(), &Action::Attack);

        assert_eq!(step.log, vec!["No enemy to attack here!"]);
        assert_eq!(step.state.players, state.players);
        assert_eq!(step.state.turn.current_player_index, 1);
    }

    #[test]
    fn accepted_action_passes_the_turn() {
        let state = game(vec![hero("Aria", 100, 10, 5), hero("Bram", 90, 9, 6)]);

        let step = apply(&state, &config(), &Action::Move(CardinalDirection::East));

        assert!(step.is_accepted());
        assert_eq!(step.state.players[0].position, Position::new(2, 1));
        assert_eq!(step.state.turn.current_player_index, 1);
        // the input snapshot is untouched
        assert_eq!(state.players[0].position, Position::new(1, 1));
        assert_eq!(state.turn.current_player_index, 0);
    }

    #[test]
    fn cooldown_rejection_still_ticks_the_cooldown() {
        let mut state = game(vec![hero("Aria", 100, 10, 5), hero("Bram", 90, 9, 6)]);
        state.players[0].abilities[1].current_cooldown = 3;

        let step = apply(&state, &config(), &Action::UseAbility(1));

        assert_eq!(step.log, vec!["Mend is on cooldown for 3 more turns!"]);
        assert_eq!(step.state.players[0].abilities[1].current_cooldown, 2);
        assert_eq!(step.state.players[0].stats, state.players[0].stats);
        assert_eq!(step.state.turn.current_player_index, 1);
    }

    #[test]
    fn ability_cooldown_ticks_at_end_of_own_turn() {
        let state = game(vec![hero("Aria", 100, 10, 5)]);

        let step = apply(&state, &config(), &Action::UseAbility(0));

        // Strike has cooldown 2 and loses one tick as the turn closes
        assert_eq!(step.state.players[0].abilities[0].current_cooldown, 1);
        assert_eq!(step.log, vec!["Aria used Strike!"]);
    }

    #[test]
    fn last_hero_falling_ends_the_game() {
        let mut state = game(vec![hero("Aria", 5, 10, 0)]);
        place_enemy(&mut state, 100, 20);

        let step = apply(&state, &config(), &Action::Attack);

        assert!(step.state.is_game_over);
        assert_eq!(
            step.log,
            vec![
                "Aria attacks Ogre for 10 damage!",
                "Ogre attacks Aria for 20 damage!",
                "Aria has been defeated!",
                "Game Over! All players have fallen!",
            ]
        );

        let after = apply(&step.state, &config(), &Action::Move(CardinalDirection::East));
        assert_eq!(after.log, vec!["The game is over."]);
        assert_eq!(after.state, step.state);
    }

    #[test]
    fn fallen_hero_is_skipped_while_party_fights_on() {
        let mut state = game(vec![
            hero("Aria", 5, 10, 0),
            hero("Bram", 90, 9, 6),
            hero("Cato", 80, 11, 4),
        ]);
        place_enemy(&mut state, 100, 20);

        let first = apply(&state, &config(), &Action::Attack);
        assert!(!first.state.is_game_over);
        assert!(!first.state.players[0].is_alive);
        assert_eq!(first.state.turn.current_player_index, 1);

        let second = apply(&first.state, &config(), &Action::Move(CardinalDirection::West));
        let third = apply(&second.state, &config(), &Action::Move(CardinalDirection::West));

        // Aria is skipped; the turn never lands on slot 0, so the round holds
        assert_eq!(third.state.turn.current_player_index, 1);
        assert_eq!(third.state.turn.turn_number, 1);
    }

    #[test]
    fn treasure_and_descent_through_apply() {
        let mut state = game(vec![hero("Aria", 100, 10, 5)]);
        let treasure = Position::new(1, 0);
        state.board.set_tile(
            treasure,
            Tile::new(treasure, TileKind::Treasure)
                .with_items(vec![Item::potion("p", "Health Potion", 25, 10)]),
        );
        let exit = Position::new(2, 0);
        state.board.set_tile(exit, Tile::new(exit, TileKind::Exit));

        let looted = apply(&state, &config(), &Action::Move(CardinalDirection::North));
        assert_eq!(looted.log, vec!["Used Health Potion and healed 0 HP!"]);

        let descended = apply(&looted.state, &config(), &Action::Move(CardinalDirection::East));
        assert_eq!(
            descended.result.as_ref().ok().and_then(ActionResult::descended_to),
            Some(2)
        );
        assert_eq!(descended.state.board.depth, 2);
        assert_eq!(descended.state.players[0].position, Position::new(1, 1));
        assert_eq!(descended.state.seed, state.seed);
    }
}
