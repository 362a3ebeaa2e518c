//! Environment inputs consumed by the rules.
//!
//! The deterministic rules need two things from outside the state: the game
//! configuration (board shape, boss cadence) and randomness for content
//! generation. [`GameEnv`] bundles the former for action transitions;
//! [`RngStream`] is the seam for the latter, with [`SeededRng`] as the
//! canonical implementation.
mod rng;

pub use rng::{RngStream, SeededRng, hash_seed};

use crate::config::GameConfig;
use crate::dungeon::DungeonGenerator;

/// Read-only facts available to every action transition.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    /// Generator producing levels with the configured board shape.
    pub fn generator(&self) -> DungeonGenerator {
        DungeonGenerator::new(self.config.clone())
    }
}
