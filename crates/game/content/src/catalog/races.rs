//! Racial stat bonuses and passives.
//!
//! Passives are descriptive: the rules do not read their modifiers.

use game_core::{PassiveEffect, PlayerRace, PlayerStats, RacialPassive};

/// Flat bonus a race adds to class stats; entries may be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaceBonus {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl RaceBonus {
    const fn new(health: i32, attack: i32, defense: i32, speed: i32) -> Self {
        Self {
            health,
            attack,
            defense,
            speed,
        }
    }

    /// Adds the bonus to `stats`, keeping the hero at full health.
    pub const fn apply(self, stats: PlayerStats) -> PlayerStats {
        PlayerStats::new(
            stats.combat.max_health + self.health,
            stats.combat.attack + self.attack,
            stats.combat.defense + self.defense,
            stats.speed + self.speed,
        )
    }
}

pub const fn race_bonus(race: PlayerRace) -> RaceBonus {
    match race {
        PlayerRace::Human => RaceBonus::new(10, 2, 2, 0),
        PlayerRace::Elf => RaceBonus::new(0, 3, 0, 3),
        PlayerRace::Dwarf => RaceBonus::new(20, 0, 3, 0),
        PlayerRace::Orc => RaceBonus::new(15, 5, -2, 0),
        PlayerRace::Halfling => RaceBonus::new(-5, 1, 0, 4),
        PlayerRace::Dragonborn => RaceBonus::new(10, 3, 1, 0),
    }
}

/// The passive trait every member of `race` carries.
pub fn racial_passive(race: PlayerRace) -> RacialPassive {
    match race {
        PlayerRace::Human => RacialPassive {
            experience_bonus: Some(10),
            ..RacialPassive::new(
                "adaptable",
                "Adaptable",
                "Learns quickly from every fight",
                PassiveEffect::Utility,
            )
        },
        PlayerRace::Elf => RacialPassive {
            critical_chance: Some(10),
            ..RacialPassive::new(
                "keen_eye",
                "Keen Eye",
                "Sharp senses find gaps in any armor",
                PassiveEffect::Combat,
            )
        },
        PlayerRace::Dwarf => RacialPassive {
            damage_reduction: Some(10),
            ..RacialPassive::new(
                "stoneskin",
                "Stoneskin",
                "Tough hide shrugs off part of every blow",
                PassiveEffect::Survival,
            )
        },
        PlayerRace::Orc => RacialPassive {
            critical_chance: Some(5),
            ..RacialPassive::new(
                "bloodlust",
                "Bloodlust",
                "Battle rage lends savage strength",
                PassiveEffect::Combat,
            )
        },
        PlayerRace::Halfling => RacialPassive {
            dodge_chance: Some(15),
            gold_bonus: Some(10),
            ..RacialPassive::new(
                "lucky",
                "Lucky",
                "Fortune favors the small",
                PassiveEffect::Survival,
            )
        },
        PlayerRace::Dragonborn => RacialPassive {
            damage_reduction: Some(5),
            healing_bonus: Some(10),
            ..RacialPassive::new(
                "draconic_blood",
                "Draconic Blood",
                "Ancestral scales and a hardy constitution",
                PassiveEffect::Survival,
            )
        },
    }
}

pub fn race_description(race: PlayerRace) -> &'static str {
    match race {
        PlayerRace::Human => "Balanced in all attributes with bonus to all stats",
        PlayerRace::Elf => "Agile and precise with bonus to speed and attack",
        PlayerRace::Dwarf => "Sturdy and resilient with high health and defense",
        PlayerRace::Orc => "Powerful brutes with massive attack but lower defense",
        PlayerRace::Halfling => "Small and nimble, quick on their feet but frail",
        PlayerRace::Dragonborn => "Proud descendants of dragons with strength and grit",
    }
}
