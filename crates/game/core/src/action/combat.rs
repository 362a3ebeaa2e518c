use crate::action::{ActionError, ActionTransition};
use crate::combat::{
    AbilityOutcome, check_enemy_death, check_player_death, gain_rewards, perform_attack,
    use_ability,
};
use crate::env::GameEnv;
use crate::state::{GameState, Player, Tile};

/// What a basic attack exchange did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub damage_dealt: i32,
    /// Counter-attack damage; `None` when the enemy died first.
    pub damage_taken: Option<i32>,
    pub enemy_defeated: bool,
    pub attacker_defeated: bool,
}

/// The current hero strikes the enemy sharing their tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction;

impl AttackAction {
    pub fn new() -> Self {
        Self
    }
}

impl ActionTransition for AttackAction {
    type Error = ActionError;
    type Result = AttackResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let player = living_actor(state)?;
        if state.enemy_at(player.position).is_none() {
            return Err(ActionError::NoEnemy);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        log: &mut Vec<String>,
    ) -> Result<Self::Result, Self::Error> {
        let index = state.turn.current_player_index;
        let player = state
            .players
            .get_mut(index)
            .ok_or(ActionError::NoCurrentPlayer { index })?;
        let tile = state
            .board
            .tile_mut(player.position)
            .ok_or(ActionError::NoEnemy)?;
        let enemy = tile.enemy.as_mut().ok_or(ActionError::NoEnemy)?;

        let damage_dealt = perform_attack(player, enemy);
        log.push(format!(
            "{} attacks {} for {damage_dealt} damage!",
            player.name, enemy.name
        ));

        if check_enemy_death(enemy) {
            claim_kill(player, tile, log);
            return Ok(AttackResult {
                damage_dealt,
                damage_taken: None,
                enemy_defeated: true,
                attacker_defeated: false,
            });
        }

        let damage_taken = perform_attack(enemy, player);
        log.push(format!(
            "{} attacks {} for {damage_taken} damage!",
            enemy.name, player.name
        ));

        let attacker_defeated = check_player_death(player);
        if attacker_defeated {
            log.push(format!("{} has been defeated!", player.name));
        }

        Ok(AttackResult {
            damage_dealt,
            damage_taken: Some(damage_taken),
            enemy_defeated: false,
            attacker_defeated,
        })
    }
}

/// The current hero fires the ability in slot `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseAbilityAction {
    pub index: usize,
}

impl UseAbilityAction {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl ActionTransition for UseAbilityAction {
    type Error = ActionError;
    type Result = AbilityOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let player = living_actor(state)?;
        let ability = player
            .abilities
            .get(self.index)
            .ok_or_else(|| ActionError::UnknownAbility {
                name: player.name.clone(),
                index: self.index,
            })?;

        if !ability.is_ready() {
            return Err(ActionError::OnCooldown {
                ability: ability.name.clone(),
                remaining: ability.current_cooldown,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        log: &mut Vec<String>,
    ) -> Result<Self::Result, Self::Error> {
        let index = state.turn.current_player_index;
        let player = state
            .players
            .get_mut(index)
            .ok_or(ActionError::NoCurrentPlayer { index })?;
        let mut tile = state.board.tile_mut(player.position);
        let target = tile.as_deref_mut().and_then(|tile| tile.enemy.as_mut());

        let outcome =
            use_ability(player, self.index, target).ok_or_else(|| ActionError::UnknownAbility {
                name: player.name.clone(),
                index: self.index,
            })?;
        log.push(outcome.message().to_string());

        if let Some(tile) = tile
            && tile.enemy.as_ref().is_some_and(check_enemy_death)
        {
            claim_kill(player, tile, log);
        }

        Ok(outcome)
    }
}

/// The current hero, if alive; used by actions other than movement.
fn living_actor(state: &GameState) -> Result<&Player, ActionError> {
    let player = super::acting_player(state)?;
    if !player.is_alive {
        return Err(ActionError::DeadCannotAct {
            name: player.name.clone(),
        });
    }
    Ok(player)
}

/// Pays out a defeated enemy and clears it from its tile.
fn claim_kill(player: &mut Player, tile: &mut Tile, log: &mut Vec<String>) {
    if let Some(enemy) = tile.clear_enemy() {
        log.push(gain_rewards(player, &enemy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::{Position, TileKind};
    use crate::testing::{game, hero, monster};

    fn with_enemy(state: &mut GameState, health: i32, attack: i32, defense: i32) {
        let position = Position::new(1, 1);
        state.board.set_tile(
            position,
            Tile::new(position, TileKind::Enemy)
                .revealed()
                .with_enemy(monster("Goblin", health, attack, defense)),
        );
    }

    fn run<T>(action: T, state: &mut GameState) -> (T::Result, Vec<String>)
    where
        T: ActionTransition<Error = ActionError>,
    {
        let config = GameConfig::default();
        let env = GameEnv::new(&config);
        let mut log = Vec::new();
        action.pre_validate(state, &env).expect("valid action");
        let result = action.apply(state, &env, &mut log).expect("applied");
        (result, log)
    }

    #[test]
    fn attack_without_enemy_is_rejected() {
        let state = game(vec![hero("Aria", 100, 12, 5)]);
        let config = GameConfig::default();

        let error = AttackAction::new()
            .pre_validate(&state, &GameEnv::new(&config))
            .unwrap_err();

        assert_eq!(error, ActionError::NoEnemy);
        assert_eq!(error.to_string(), "No enemy to attack here!");
    }

    #[test]
    fn surviving_enemy_counter_attacks() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);
        with_enemy(&mut state, 30, 9, 8);

        let (result, log) = run(AttackAction::new(), &mut state);

        assert_eq!(result.damage_dealt, 4);
        assert_eq!(result.damage_taken, Some(4));
        assert_eq!(
            log,
            vec![
                "Aria attacks Goblin for 4 damage!",
                "Goblin attacks Aria for 4 damage!"
            ]
        );
        assert_eq!(state.players[0].stats.combat.current_health, 96);
        assert_eq!(
            state.enemy_at(Position::new(1, 1)).map(|enemy| enemy.stats.current_health),
            Some(26)
        );
    }

    #[test]
    fn killing_blow_pays_out_and_clears_tile() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);
        with_enemy(&mut state, 4, 50, 8);

        let (result, log) = run(AttackAction::new(), &mut state);

        assert!(result.enemy_defeated);
        assert_eq!(result.damage_taken, None);
        assert_eq!(
            log,
            vec![
                "Aria attacks Goblin for 4 damage!",
                "Defeated Goblin! Gained 15 gold and 8 exp!"
            ]
        );
        let tile = state.board.tile(Position::new(1, 1)).expect("tile");
        assert_eq!(tile.kind, TileKind::Empty);
        assert!(tile.enemy.is_none());
        assert_eq!(state.players[0].gold, 15);
        assert_eq!(state.players[0].stats.combat.current_health, 100);
    }

    #[test]
    fn counter_attack_can_kill_the_attacker() {
        let mut state = game(vec![hero("Aria", 5, 12, 0)]);
        with_enemy(&mut state, 50, 10, 0);

        let (result, log) = run(AttackAction::new(), &mut state);

        assert!(result.attacker_defeated);
        assert_eq!(log.last().map(String::as_str), Some("Aria has been defeated!"));
        assert!(!state.players[0].is_alive);
        assert_eq!(state.players[0].stats.combat.current_health, 0);
    }

    #[test]
    fn ability_kill_triggers_rewards() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);
        with_enemy(&mut state, 5, 4, 3);

        let (outcome, log) = run(UseAbilityAction::new(0), &mut state);

        assert_eq!(outcome.damage(), 5);
        assert_eq!(
            log,
            vec![
                "Aria used Strike! Dealt 5 damage!",
                "Defeated Goblin! Gained 15 gold and 8 exp!"
            ]
        );
        assert!(state.enemy_at(Position::new(1, 1)).is_none());
    }

    #[test]
    fn ability_without_enemy_still_resolves() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);

        let (outcome, log) = run(UseAbilityAction::new(2), &mut state);

        assert!(outcome.is_used());
        assert_eq!(log, vec!["Aria used Rally!"]);
        assert_eq!(state.players[0].abilities[2].current_cooldown, 1);
    }

    #[test]
    fn ability_on_cooldown_or_missing_is_rejected() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);
        state.players[0].abilities[0].current_cooldown = 2;
        let config = GameConfig::default();
        let env = GameEnv::new(&config);

        assert_eq!(
            UseAbilityAction::new(0).pre_validate(&state, &env),
            Err(ActionError::OnCooldown {
                ability: "Strike".into(),
                remaining: 2
            })
        );
        assert_eq!(
            UseAbilityAction::new(7).pre_validate(&state, &env),
            Err(ActionError::UnknownAbility {
                name: "Aria".into(),
                index: 7
            })
        );
    }

    #[test]
    fn dead_hero_cannot_attack() {
        let mut state = game(vec![hero("Aria", 100, 12, 5)]);
        with_enemy(&mut state, 30, 9, 8);
        state.players[0].is_alive = false;
        let config = GameConfig::default();

        let error = AttackAction::new()
            .pre_validate(&state, &GameEnv::new(&config))
            .unwrap_err();

        assert_eq!(error.to_string(), "Aria is dead and cannot act!");
    }
}
