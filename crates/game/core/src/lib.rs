//! Deterministic dungeon rules shared by the runtime and tools.
//!
//! `game-core` defines the canonical rules (actions, engine, board state,
//! combat math, procedural generation) and exposes pure APIs with no I/O.
//! All state transitions flow through [`engine::apply`] (or the borrowing
//! [`engine::GameEngine`]), and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

#[cfg(test)]
mod testing;

pub use action::{
    Action, ActionError, ActionResult, ActionTransition, AttackAction, AttackResult,
    CardinalDirection, MoveAction, MoveResult, UseAbilityAction,
};
pub use combat::{AbilityOutcome, Combatant};
pub use config::GameConfig;
pub use dungeon::{DungeonGenerator, generate};
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, Step, TransitionPhase, apply};
pub use env::{GameEnv, RngStream, SeededRng, hash_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Abilities, Ability, Board, CharacterCreation, CombatStats, Enemy, GameEvent, GameEventKind,
    GameState, Item, ItemKind, PassiveEffect, Player, PlayerClass, PlayerRace, PlayerStats,
    Position, RacialPassive, Tile, TileKind, TurnState,
};
