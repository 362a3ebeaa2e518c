//! Procedural level generation.
//!
//! A level is a pure function of `(width, height, depth, seed)`: the random
//! stream is seeded from the seed and the depth, tiles are visited in
//! row-major order, and each non-fixed tile consumes its rolls in a fixed
//! order. Fixed tiles (start, boss lair, exit) never draw from the stream.
mod enemies;
mod generator;
mod loot;

pub use enemies::{BOSS_NAMES, ENEMY_NAMES, roll_enemy};
pub use generator::DungeonGenerator;
pub use loot::{ARMORS, WEAPONS, roll_loot};

use crate::config::GameConfig;
use crate::state::Board;

/// Generates level `depth` of a `width x height` dungeon for `seed`.
///
/// Uses the default boss interval; see [`DungeonGenerator`] for a fully
/// configured generator.
pub fn generate(width: u32, height: u32, depth: u32, seed: &str) -> Board {
    DungeonGenerator::new(GameConfig::with_board_size(width, height)).generate(depth, seed)
}
