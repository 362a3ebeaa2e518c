//! A single player's game session.
//!
//! The session owns at most one [`GameState`] and the [`GameLog`] that goes
//! with it. Every intent is resolved through [`game_core::apply`], so the
//! stored state is only ever replaced by a complete new snapshot.

use chrono::Utc;
use game_content::create_player;
use game_core::{
    Action, Board, CardinalDirection, CharacterCreation, DungeonGenerator, GameConfig, GameState,
    Step,
};

use crate::api::{Result, SessionError, UserHandle};
use crate::config::RuntimeConfig;
use crate::log::GameLog;

/// Drives one game from party creation to game over.
#[derive(Debug)]
pub struct Session {
    config: RuntimeConfig,
    user: Option<UserHandle>,
    state: Option<GameState>,
    log: GameLog,
}

impl Session {
    pub fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            user: None,
            state: None,
            log: GameLog::new(),
        }
    }

    /// Attaches the identity of whoever is playing.
    pub fn with_user(mut self, user: UserHandle) -> Self {
        self.user = Some(user);
        self
    }

    pub fn user(&self) -> Option<&UserHandle> {
        self.user.as_ref()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The running game, if one has been started.
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// The configured window of most recent log lines.
    pub fn recent_log(&self) -> &[String] {
        self.log.recent(self.config.log_window)
    }

    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Starts a new game with the first `num_players` characters.
    ///
    /// Any game in progress is discarded. The party starts on the centre of
    /// level 1 and the log is reset to a single start line.
    pub fn start_game(
        &mut self,
        characters: &[CharacterCreation],
        num_players: usize,
    ) -> Result<&GameState> {
        if let Err(error) = self.validate_party(characters, num_players) {
            tracing::warn!(%error, "rejected game start");
            return Err(error);
        }

        let started_at = Utc::now().timestamp_millis();
        let seed = self
            .config
            .seed
            .clone()
            .unwrap_or_else(|| started_at.to_string());

        let board = DungeonGenerator::new(self.config.game.clone()).generate(1, &seed);
        let start = board.center();
        let players = characters[..num_players]
            .iter()
            .enumerate()
            .map(|(index, creation)| create_player(index, creation, start))
            .collect();

        let state = GameState::new(board, players, seed, started_at);

        tracing::info!(
            seed = %state.seed,
            players = num_players,
            user = self.user.as_ref().map(UserHandle::as_str),
            board = %fingerprint(&state.board),
            "game started"
        );

        self.log.clear();
        self.log.push(format!("Game started with {num_players} players!"));

        Ok(&*self.state.insert(state))
    }

    /// Continues from a snapshot produced elsewhere, such as a replay.
    ///
    /// Any game in progress is discarded and the log starts empty.
    pub fn resume(&mut self, state: GameState) -> &GameState {
        tracing::info!(
            seed = %state.seed,
            depth = state.board.depth,
            turn = state.turn.turn_number,
            user = self.user.as_ref().map(UserHandle::as_str),
            "game resumed"
        );
        self.log.clear();
        self.state.insert(state)
    }

    pub fn move_player(&mut self, direction: CardinalDirection) -> Result<&GameState> {
        self.dispatch(Action::Move(direction))
    }

    pub fn attack(&mut self) -> Result<&GameState> {
        self.dispatch(Action::Attack)
    }

    /// Fires the current hero's ability in zero-based slot `index`.
    pub fn use_ability(&mut self, index: usize) -> Result<&GameState> {
        self.dispatch(Action::UseAbility(index))
    }

    /// Resolves one intent for the hero whose turn it is.
    ///
    /// Gameplay rejections are not errors: the refused action does nothing,
    /// its explanation goes to the log and the turn passes all the same.
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState> {
        let state = self.state.as_ref().ok_or(SessionError::NoActiveGame)?;
        let step = game_core::apply(state, &self.config.game, &action);
        trace_step(state, &action, &step);

        let Step { state, log, .. } = step;
        self.log.extend(log);
        Ok(&*self.state.insert(state))
    }

    /// Throws away the current game and its log.
    pub fn reset_game(&mut self) {
        if let Some(state) = self.state.take() {
            tracing::info!(
                depth = state.board.depth,
                turn = state.turn.turn_number,
                "game reset"
            );
        }
        self.log.clear();
    }

    fn validate_party(&self, characters: &[CharacterCreation], num_players: usize) -> Result<()> {
        let max = self.config.game.max_party_size.min(GameConfig::MAX_PARTY_SIZE);
        if num_players == 0 || num_players > max {
            return Err(SessionError::InvalidPartySize {
                requested: num_players,
                max,
            });
        }
        if characters.len() < num_players {
            return Err(SessionError::NotEnoughCharacters {
                requested: num_players,
                available: characters.len(),
            });
        }
        if let Some(index) = characters[..num_players]
            .iter()
            .position(|creation| creation.name.trim().is_empty())
        {
            return Err(SessionError::EmptyName { index });
        }
        Ok(())
    }
}

/// Hex digest of `board` for traces.
fn fingerprint(board: &Board) -> String {
    match board.fingerprint() {
        Ok(digest) => hex::encode(digest),
        Err(error) => {
            tracing::warn!(%error, "board fingerprint failed");
            "unavailable".to_string()
        }
    }
}

fn trace_step(before: &GameState, action: &Action, step: &Step) {
    let actor = before
        .current_player()
        .map(|player| player.name.as_str())
        .unwrap_or_default();

    match &step.result {
        Ok(result) => {
            tracing::debug!(
                action = action.as_snake_case(),
                actor,
                turn = step.state.turn.turn_number,
                board = %fingerprint(&step.state.board),
                "action resolved"
            );
            if let Some(depth) = result.descended_to() {
                tracing::info!(depth, "party descended");
            }
            if step.state.is_game_over && !before.is_game_over {
                tracing::info!(
                    depth = step.state.board.depth,
                    turn = step.state.turn.turn_number,
                    "game over"
                );
            }
        }
        Err(error) => {
            tracing::debug!(
                action = action.as_snake_case(),
                actor,
                code = game_core::GameError::error_code(error.action_error()),
                "action rejected"
            );
        }
    }
}
