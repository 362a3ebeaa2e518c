use crate::state::types::{Abilities, Item, Position};

use super::PlayerStats;

/// Hero class chosen at character creation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PlayerClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
    Ranger,
    Paladin,
}

/// Hero race chosen at character creation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum PlayerRace {
    Human,
    Elf,
    Dwarf,
    Orc,
    Halfling,
    Dragonborn,
}

/// Broad category of a racial passive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PassiveEffect {
    Combat,
    Survival,
    Utility,
}

/// Static per-race modifier descriptor.
///
/// All modifiers are percentages. They are descriptive only: combat, loot and
/// reward resolution do not read them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RacialPassive {
    pub id: String,
    pub name: String,
    pub description: String,
    pub effect: PassiveEffect,
    pub damage_reduction: Option<u32>,
    pub critical_chance: Option<u32>,
    pub dodge_chance: Option<u32>,
    pub healing_bonus: Option<u32>,
    pub gold_bonus: Option<u32>,
    pub experience_bonus: Option<u32>,
}

impl RacialPassive {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        effect: PassiveEffect,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            effect,
            damage_reduction: None,
            critical_chance: None,
            dodge_chance: None,
            healing_bonus: None,
            gold_bonus: None,
            experience_bonus: None,
        }
    }
}

/// One hero as handed over by the character-creation screen.
///
/// The name is expected to be non-empty after trimming; the runtime checks
/// this before a game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterCreation {
    pub name: String,
    pub class: PlayerClass,
    pub race: PlayerRace,
}

impl CharacterCreation {
    pub fn new(name: impl Into<String>, class: PlayerClass, race: PlayerRace) -> Self {
        Self {
            name: name.into(),
            class,
            race,
        }
    }
}

/// A party member.
///
/// Heroes stay in the roster after death with `is_alive == false`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: String,
    pub name: String,
    pub class: PlayerClass,
    pub race: PlayerRace,
    pub stats: PlayerStats,
    pub abilities: Abilities,
    pub racial_passive: RacialPassive,
    pub position: Position,
    pub is_alive: bool,
    /// Equipped weapons and armor, in pickup order.
    pub inventory: Vec<Item>,
    pub gold: u32,
}

impl Player {
    /// Assembles a living hero with no loot.
    pub fn new(
        id: impl Into<String>,
        creation: &CharacterCreation,
        stats: PlayerStats,
        abilities: Abilities,
        racial_passive: RacialPassive,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: creation.name.clone(),
            class: creation.class,
            race: creation.race,
            stats,
            abilities,
            racial_passive,
            position,
            is_alive: true,
            inventory: Vec::new(),
            gold: 0,
        }
    }
}
