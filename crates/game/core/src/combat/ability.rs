//! Ability resolution and cooldown bookkeeping.

use crate::state::{Enemy, Player};

use super::damage::calculate_damage;

/// Result of invoking a hero's ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityOutcome {
    /// The ability fired and went on cooldown.
    Used {
        damage: i32,
        healing: i32,
        message: String,
    },
    /// The ability is still recharging; nothing changed.
    OnCooldown { remaining: u32, message: String },
}

impl AbilityOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Used { message, .. } | Self::OnCooldown { message, .. } => message,
        }
    }

    pub fn damage(&self) -> i32 {
        match self {
            Self::Used { damage, .. } => *damage,
            Self::OnCooldown { .. } => 0,
        }
    }

    pub fn healing(&self) -> i32 {
        match self {
            Self::Used { healing, .. } => *healing,
            Self::OnCooldown { .. } => 0,
        }
    }

    pub fn is_used(&self) -> bool {
        matches!(self, Self::Used { .. })
    }
}

/// Fires the ability in slot `index`, optionally against `target`.
///
/// Returns `None` when the hero has no ability in that slot. Damage only lands
/// when the ability has a damage value and a target is present; healing always
/// applies to the caster and is capped at missing health. A fired ability goes
/// on its full cooldown even if it did nothing else.
pub fn use_ability(
    player: &mut Player,
    index: usize,
    target: Option<&mut Enemy>,
) -> Option<AbilityOutcome> {
    let caster = player.name.clone();
    let ability = player.abilities.get(index)?;

    if !ability.is_ready() {
        return Some(AbilityOutcome::OnCooldown {
            remaining: ability.current_cooldown,
            message: format!(
                "{} is on cooldown for {} more turns!",
                ability.name, ability.current_cooldown
            ),
        });
    }

    let mut message = format!("{caster} used {}!", ability.name);
    let mut damage = 0;
    let mut healing = 0;

    if let (Some(raw), Some(target)) = (ability.damage, target) {
        damage = calculate_damage(raw, target.stats.defense);
        target.stats.take_damage(damage);
        message.push_str(&format!(" Dealt {damage} damage!"));
    }

    if let Some(amount) = ability.healing {
        healing = player.stats.combat.heal(amount);
        message.push_str(&format!(" Healed {healing} HP!"));
    }

    if let Some(ability) = player.abilities.get_mut(index) {
        ability.trigger_cooldown();
    }

    Some(AbilityOutcome::Used {
        damage,
        healing,
        message,
    })
}

/// Ticks every ability of `player` one turn closer to ready.
pub fn update_cooldowns(player: &mut Player) {
    for ability in player.abilities.iter_mut() {
        ability.tick_cooldown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{hero, monster};

    #[test]
    fn damage_ability_hits_target_and_starts_cooldown() {
        let mut player = hero("Aria", 100, 10, 5);
        let mut enemy = monster("Goblin", 30, 4, 3);

        let outcome = use_ability(&mut player, 0, Some(&mut enemy)).expect("slot 0");

        assert_eq!(outcome.damage(), 5);
        assert_eq!(outcome.message(), "Aria used Strike! Dealt 5 damage!");
        assert_eq!(enemy.stats.current_health, 25);
        assert_eq!(player.abilities[0].current_cooldown, 2);
    }

    #[test]
    fn damage_ability_without_target_still_goes_on_cooldown() {
        let mut player = hero("Aria", 100, 10, 5);

        let outcome = use_ability(&mut player, 0, None).expect("slot 0");

        assert_eq!(outcome.damage(), 0);
        assert_eq!(outcome.message(), "Aria used Strike!");
        assert_eq!(player.abilities[0].current_cooldown, 2);
    }

    #[test]
    fn healing_is_capped_at_missing_health() {
        let mut player = hero("Aria", 100, 10, 5);
        player.stats.combat.current_health = 95;

        let outcome = use_ability(&mut player, 1, None).expect("slot 1");

        assert_eq!(outcome.healing(), 5);
        assert_eq!(outcome.message(), "Aria used Mend! Healed 5 HP!");
        assert_eq!(player.stats.combat.current_health, 100);
    }

    #[test]
    fn utility_ability_only_sets_cooldown() {
        let mut player = hero("Aria", 100, 10, 5);
        let mut enemy = monster("Goblin", 30, 4, 3);

        let outcome = use_ability(&mut player, 2, Some(&mut enemy)).expect("slot 2");

        assert!(outcome.is_used());
        assert_eq!(outcome.message(), "Aria used Rally!");
        assert_eq!(enemy.stats.current_health, 30);
        assert_eq!(player.abilities[2].current_cooldown, 1);
    }

    #[test]
    fn cooldown_blocks_reuse_without_changes() {
        let mut player = hero("Aria", 100, 10, 5);
        let mut enemy = monster("Goblin", 30, 4, 3);
        use_ability(&mut player, 0, Some(&mut enemy));

        let before_player = player.clone();
        let before_enemy = enemy.clone();
        let outcome = use_ability(&mut player, 0, Some(&mut enemy)).expect("slot 0");

        assert_eq!(
            outcome,
            AbilityOutcome::OnCooldown {
                remaining: 2,
                message: "Strike is on cooldown for 2 more turns!".to_string(),
            }
        );
        assert_eq!(player, before_player);
        assert_eq!(enemy, before_enemy);
    }

    #[test]
    fn missing_slot_is_none() {
        let mut player = hero("Aria", 100, 10, 5);
        assert!(use_ability(&mut player, 3, None).is_none());
    }

    #[test]
    fn cooldowns_tick_down_and_stop_at_zero() {
        let mut player = hero("Aria", 100, 10, 5);
        use_ability(&mut player, 0, None);
        use_ability(&mut player, 2, None);

        update_cooldowns(&mut player);
        assert_eq!(player.abilities[0].current_cooldown, 1);
        assert_eq!(player.abilities[2].current_cooldown, 0);

        update_cooldowns(&mut player);
        update_cooldowns(&mut player);
        assert!(player.abilities.iter().all(|ability| ability.is_ready()));
    }
}
