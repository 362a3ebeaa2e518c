//! Active abilities carried by heroes.
//!
//! Every hero holds personal copies of their class abilities, so cooldowns
//! tick independently of the catalog and of other heroes of the same class.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

/// An active ability with flat damage and/or healing and a turn cooldown.
///
/// An ability with `current_cooldown > 0` cannot be used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub damage: Option<i32>,
    pub healing: Option<i32>,
    /// Turns the ability stays unusable after being cast.
    pub cooldown: u32,
    /// Turns remaining before the ability can be cast again.
    pub current_cooldown: u32,
}

impl Ability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cooldown: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            damage: None,
            healing: None,
            cooldown,
            current_cooldown: 0,
        }
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_healing(mut self, healing: i32) -> Self {
        self.healing = Some(healing);
        self
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// Puts the ability on its full cooldown.
    pub fn trigger_cooldown(&mut self) {
        self.current_cooldown = self.cooldown;
    }

    /// Advances the cooldown by one turn, never below zero.
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

/// Abilities held by a single hero.
pub type Abilities = ArrayVec<Ability, { GameConfig::MAX_ABILITIES }>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_cycle() {
        let mut ability = Ability::new("cleave", "Cleave", "", 2).with_damage(15);
        assert!(ability.is_ready());

        ability.trigger_cooldown();
        assert_eq!(ability.current_cooldown, 2);
        assert!(!ability.is_ready());

        ability.tick_cooldown();
        ability.tick_cooldown();
        ability.tick_cooldown();
        assert_eq!(ability.current_cooldown, 0);
        assert!(ability.is_ready());
    }
}
