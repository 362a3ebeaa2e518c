//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the board, the party and
//! turn bookkeeping. Runtime layers clone or query this state but produce new
//! snapshots exclusively through the engine.
pub mod types;

pub use types::{
    Abilities, Ability, Board, CharacterCreation, CombatStats, Enemy, GameEvent, GameEventKind,
    Item, ItemKind, PassiveEffect, Player, PlayerClass, PlayerRace, PlayerStats, Position,
    RacialPassive, Tile, TileKind, TurnState,
};

/// Canonical snapshot of one running game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The current dungeon level.
    pub board: Board,

    /// The party in turn order. Dead heroes stay in the list.
    pub players: Vec<Player>,

    /// Whose turn it is and which round.
    pub turn: TurnState,

    /// Set once every hero has died; terminal.
    pub is_game_over: bool,

    /// Seed for procedural generation.
    ///
    /// Set once at game start and never modified. Combined with the depth to
    /// generate each level.
    pub seed: String,

    /// Wall-clock start of the run in unix milliseconds, supplied by the caller.
    pub run_started_at: i64,
}

impl GameState {
    /// Creates a fresh state on the first round with the first hero to act.
    pub fn new(
        board: Board,
        players: Vec<Player>,
        seed: impl Into<String>,
        run_started_at: i64,
    ) -> Self {
        Self {
            board,
            players,
            turn: TurnState::new(),
            is_game_over: false,
            seed: seed.into(),
            run_started_at,
        }
    }

    /// The hero whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn.current_player_index)
    }

    pub fn current_player_mut(&mut self) -> Option<&mut Player> {
        self.players.get_mut(self.turn.current_player_index)
    }

    /// Returns true when no hero is alive (also true for an empty party).
    pub fn all_players_dead(&self) -> bool {
        self.players.iter().all(|player| !player.is_alive)
    }

    pub fn living_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_alive)
    }

    /// The enemy standing on `position`, if any.
    pub fn enemy_at(&self, position: Position) -> Option<&Enemy> {
        self.board.tile(position)?.enemy.as_ref()
    }
}
