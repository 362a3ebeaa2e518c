//! Combat resolution.
//!
//! Functions here operate directly on the actors involved and never look at
//! the board. The engine decides who fights whom; this module only does the
//! arithmetic and composes the log lines.
//!
//! # Core Functions
//!
//! - `perform_attack`: basic attack, `max(1, attack - defense)`
//! - `use_ability`: cooldown-gated ability damage and healing
//! - `pickup_item`: loot effects (gold, healing, permanent bonuses)
//! - `gain_rewards`: gold for a defeated enemy

mod ability;
mod damage;
mod loot;

pub use ability::{AbilityOutcome, update_cooldowns, use_ability};
pub use damage::{MIN_DAMAGE, calculate_damage, perform_attack};
pub use loot::{check_enemy_death, check_player_death, gain_rewards, pickup_item};

use crate::state::{CombatStats, Enemy, Player};

/// Anything that can deal and receive damage.
pub trait Combatant {
    fn name(&self) -> &str;

    fn stats(&self) -> &CombatStats;

    fn stats_mut(&mut self) -> &mut CombatStats;

    fn is_defeated(&self) -> bool {
        self.stats().is_depleted()
    }
}

impl Combatant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CombatStats {
        &self.stats.combat
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats.combat
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &CombatStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CombatStats {
        &mut self.stats
    }
}
