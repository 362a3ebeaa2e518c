pub mod abilities;
pub mod actor;
pub mod board;
pub mod common;
pub mod item;
pub mod tile;
pub mod turn;

// Re-export ability types
pub use abilities::{Abilities, Ability};

// Re-export all actor-related types
pub use actor::{
    // Input from character creation
    CharacterCreation,
    // Stats
    CombatStats,
    // Monsters
    Enemy,
    // Racial passives
    PassiveEffect,
    // Heroes
    Player,
    PlayerClass,
    PlayerRace,
    PlayerStats,
    RacialPassive,
};

// Re-export board types
pub use board::Board;

// Re-export common types
pub use common::Position;

// Re-export item types
pub use item::{Item, ItemKind};

// Re-export tile types
pub use tile::{GameEvent, GameEventKind, Tile, TileKind};

// Re-export turn state
pub use turn::TurnState;
