//! Enemy roster and stat scaling.

use crate::env::RngStream;
use crate::state::{CombatStats, Enemy, Position};

/// Names drawn for boss encounters.
pub const BOSS_NAMES: [&str; 4] = ["Dragon", "Lich King", "Demon Lord", "Ancient Evil"];

/// Names drawn for regular encounters.
pub const ENEMY_NAMES: [&str; 7] = [
    "Goblin", "Orc", "Skeleton", "Spider", "Wolf", "Bandit", "Zombie",
];

/// Levels a boss sits above the floor it guards.
const BOSS_LEVEL_OFFSET: u32 = 5;

/// Boss health multiplier.
const BOSS_HEALTH_MULTIPLIER: i32 = 3;

/// Boss gold and experience multiplier.
const BOSS_REWARD_MULTIPLIER: u32 = 5;

/// Rolls the enemy that guards `position` on level `depth`.
///
/// Consumes exactly one value from `rng` (the name).
pub fn roll_enemy<R>(depth: u32, is_boss: bool, position: Position, rng: &mut R) -> Enemy
where
    R: RngStream + ?Sized,
{
    let level = depth + if is_boss { BOSS_LEVEL_OFFSET } else { 0 };
    let pool: &[&str] = if is_boss { &BOSS_NAMES } else { &ENEMY_NAMES };
    let base_name = pool[rng.next_int(0, pool.len() as i32 - 1) as usize];

    let (health_multiplier, reward_multiplier) = if is_boss {
        (BOSS_HEALTH_MULTIPLIER, BOSS_REWARD_MULTIPLIER)
    } else {
        (1, 1)
    };

    let scale = level as i32;
    let max_health = (20 + scale * 10) * health_multiplier;

    Enemy {
        id: format!("enemy_{depth}_{}_{}", position.x, position.y),
        name: if is_boss {
            format!("{base_name} (Boss)")
        } else {
            base_name.to_string()
        },
        level,
        stats: CombatStats::new(max_health, 5 + scale * 2, 2 + scale),
        position,
        gold_reward: (10 + level * 5) * reward_multiplier,
        exp_reward: (5 + level * 3) * reward_multiplier,
    }
}
