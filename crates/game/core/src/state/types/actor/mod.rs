//! Actor-related state types.
//!
//! This module contains the types shared by everything that fights:
//! - CombatStats: health, attack and defense, used by heroes and enemies
//! - PlayerStats: combat stats plus the reserved speed stat
//! - Player: a party member, with class, race, abilities and loot
//! - Enemy: a monster placed on an enemy or boss tile

pub mod enemy;
pub mod player;

pub use enemy::Enemy;
pub use player::{
    CharacterCreation, PassiveEffect, Player, PlayerClass, PlayerRace, RacialPassive,
};

/// Health, attack and defense of any combatant.
///
/// # Invariants
///
/// - `0 <= current_health <= max_health` after every damage or heal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub max_health: i32,
    pub current_health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CombatStats {
    /// Creates stats at full health.
    pub const fn new(max_health: i32, attack: i32, defense: i32) -> Self {
        Self {
            max_health,
            current_health: max_health,
            attack,
            defense,
        }
    }

    /// Health that healing could still restore.
    pub fn missing_health(&self) -> i32 {
        (self.max_health - self.current_health).max(0)
    }

    pub fn is_depleted(&self) -> bool {
        self.current_health <= 0
    }

    /// Subtracts `amount`, flooring health at zero. Returns the new health.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.current_health = (self.current_health - amount).max(0);
        self.current_health
    }

    /// Restores up to `amount` without exceeding the maximum.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let restored = amount.max(0).min(self.missing_health());
        self.current_health += restored;
        restored
    }
}

/// Hero stats: combat stats plus speed.
///
/// Speed is carried for display and future scheduling; combat math ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub combat: CombatStats,
    pub speed: i32,
}

impl PlayerStats {
    pub const fn new(max_health: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            combat: CombatStats::new(max_health, attack, defense),
            speed,
        }
    }
}
