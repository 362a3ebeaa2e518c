//! Class base stats and signature abilities.

use game_core::{Ability, PlayerClass, PlayerStats};

/// Static description of one class ability.
struct AbilitySpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    damage: Option<i32>,
    healing: Option<i32>,
    cooldown: u32,
}

impl AbilitySpec {
    const fn strike(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        damage: i32,
        cooldown: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            damage: Some(damage),
            healing: None,
            cooldown,
        }
    }

    const fn mend(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        healing: i32,
        cooldown: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            damage: None,
            healing: Some(healing),
            cooldown,
        }
    }

    const fn utility(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        cooldown: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            damage: None,
            healing: None,
            cooldown,
        }
    }

    /// A fresh, ready-to-use copy.
    fn build(&self) -> Ability {
        let mut ability = Ability::new(self.id, self.name, self.description, self.cooldown);
        ability.damage = self.damage;
        ability.healing = self.healing;
        ability
    }
}

const WARRIOR_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike(
        "cleave",
        "Cleave",
        "A powerful melee attack that deals heavy damage",
        15,
        2,
    ),
    AbilitySpec::strike(
        "shield_bash",
        "Shield Bash",
        "Bash enemy with shield, dealing damage and stunning",
        10,
        3,
    ),
    AbilitySpec::utility("war_cry", "War Cry", "Boost attack temporarily", 4),
];

const MAGE_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike(
        "fireball",
        "Fireball",
        "Launch a ball of fire dealing massive damage",
        20,
        3,
    ),
    AbilitySpec::strike(
        "ice_shard",
        "Ice Shard",
        "Fire sharp ice dealing moderate damage",
        12,
        2,
    ),
    AbilitySpec::utility(
        "arcane_shield",
        "Arcane Shield",
        "Create a magical shield that absorbs damage",
        4,
    ),
];

const ROGUE_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike(
        "backstab",
        "Backstab",
        "Strike from shadows for critical damage",
        18,
        2,
    ),
    AbilitySpec::strike(
        "poison_dart",
        "Poison Dart",
        "Throw poisoned dart that deals damage over time",
        8,
        2,
    ),
    AbilitySpec::utility("evasion", "Evasion", "Dodge the next attack", 3),
];

const CLERIC_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike("holy_smite", "Holy Smite", "Smite enemy with holy power", 12, 2),
    AbilitySpec::mend("heal", "Heal", "Restore health to yourself", 20, 3),
    AbilitySpec::utility(
        "divine_protection",
        "Divine Protection",
        "Grant temporary invulnerability",
        5,
    ),
];

const RANGER_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike(
        "aimed_shot",
        "Aimed Shot",
        "A carefully aimed arrow that finds the weak spot",
        16,
        2,
    ),
    AbilitySpec::strike("volley", "Volley", "Loose a rain of arrows", 10, 3),
    AbilitySpec::utility(
        "camouflage",
        "Camouflage",
        "Blend into the surroundings",
        3,
    ),
];

const PALADIN_ABILITIES: [AbilitySpec; 3] = [
    AbilitySpec::strike(
        "holy_strike",
        "Holy Strike",
        "A weapon blow charged with radiant power",
        14,
        2,
    ),
    AbilitySpec::mend(
        "lay_on_hands",
        "Lay on Hands",
        "Channel divine energy to mend wounds",
        25,
        4,
    ),
    AbilitySpec::utility(
        "divine_shield",
        "Divine Shield",
        "Surround yourself with a barrier of light",
        5,
    ),
];

const fn ability_specs(class: PlayerClass) -> &'static [AbilitySpec; 3] {
    match class {
        PlayerClass::Warrior => &WARRIOR_ABILITIES,
        PlayerClass::Mage => &MAGE_ABILITIES,
        PlayerClass::Rogue => &ROGUE_ABILITIES,
        PlayerClass::Cleric => &CLERIC_ABILITIES,
        PlayerClass::Ranger => &RANGER_ABILITIES,
        PlayerClass::Paladin => &PALADIN_ABILITIES,
    }
}

/// Base stats of a class before racial bonuses, at full health.
pub const fn class_stats(class: PlayerClass) -> PlayerStats {
    match class {
        PlayerClass::Warrior => PlayerStats::new(100, 12, 8, 5),
        PlayerClass::Mage => PlayerStats::new(70, 15, 4, 7),
        PlayerClass::Rogue => PlayerStats::new(80, 14, 5, 9),
        PlayerClass::Cleric => PlayerStats::new(90, 10, 7, 6),
        PlayerClass::Ranger => PlayerStats::new(85, 13, 6, 8),
        PlayerClass::Paladin => PlayerStats::new(105, 11, 9, 4),
    }
}

/// The three signature abilities of `class`, all off cooldown.
pub fn abilities_for_class(class: PlayerClass) -> [Ability; 3] {
    ability_specs(class).each_ref().map(AbilitySpec::build)
}

pub fn class_description(class: PlayerClass) -> &'static str {
    match class {
        PlayerClass::Warrior => "Masters of melee combat with high health and defense",
        PlayerClass::Mage => "Wielders of powerful magic with devastating spells",
        PlayerClass::Rogue => "Swift assassins with high damage and evasion",
        PlayerClass::Cleric => "Holy warriors who can heal and smite enemies",
        PlayerClass::Ranger => "Keen-eyed hunters who strike from a distance",
        PlayerClass::Paladin => "Armored champions who blend steel and faith",
    }
}

#[cfg(test)]
mod tests {
    use game_core::PlayerClass;

    use super::*;

    #[test]
    fn abilities_start_ready() {
        for class in [
            PlayerClass::Warrior,
            PlayerClass::Mage,
            PlayerClass::Rogue,
            PlayerClass::Cleric,
            PlayerClass::Ranger,
            PlayerClass::Paladin,
        ] {
            let abilities = abilities_for_class(class);
            assert!(abilities.iter().all(|ability| ability.current_cooldown == 0));
            assert!(abilities.iter().all(|ability| ability.cooldown > 0));
        }
    }

    #[test]
    fn cleric_heal_is_healing_only() {
        let [smite, heal, protection] = abilities_for_class(PlayerClass::Cleric);

        assert_eq!(smite.damage, Some(12));
        assert_eq!(heal.name, "Heal");
        assert_eq!(heal.healing, Some(20));
        assert_eq!(heal.damage, None);
        assert_eq!(heal.cooldown, 3);
        assert_eq!(protection.cooldown, 5);
    }

    #[test]
    fn copies_are_independent() {
        let mut first = abilities_for_class(PlayerClass::Mage);
        first[0].trigger_cooldown();

        let second = abilities_for_class(PlayerClass::Mage);
        assert_eq!(first[0].current_cooldown, 3);
        assert_eq!(second[0].current_cooldown, 0);
    }
}
