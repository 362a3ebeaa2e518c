use crate::state::types::Position;

use super::CombatStats;

/// A monster guarding an enemy or boss tile.
///
/// Enemies have no separate death flag; one whose health reaches zero is
/// removed from its tile once rewards are granted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub stats: CombatStats,
    /// Tile the enemy was placed on.
    pub position: Position,
    pub gold_reward: u32,
    /// Reported when the enemy is defeated; there is no leveling system.
    pub exp_reward: u32,
}
