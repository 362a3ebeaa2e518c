//! Loot pickup, kill rewards and death checks.

use crate::state::{Enemy, Item, ItemKind, Player};

/// Applies a picked-up item to `player` and returns the log line.
///
/// Gold and potions are consumed on the spot. Weapons and armor go into the
/// inventory and their bonus is added permanently; there is no comparison
/// with gear already carried.
pub fn pickup_item(player: &mut Player, item: Item) -> String {
    match item.kind {
        ItemKind::Treasure => {
            player.gold += item.value;
            format!("Found {} gold!", item.value)
        }
        ItemKind::Potion => {
            let healed = player.stats.combat.heal(item.heal_amount.unwrap_or(0));
            format!("Used {} and healed {healed} HP!", item.name)
        }
        ItemKind::Weapon | ItemKind::Armor => {
            let message = match (item.kind, item.attack_bonus, item.defense_bonus) {
                (ItemKind::Weapon, Some(bonus), _) if bonus != 0 => {
                    player.stats.combat.attack += bonus;
                    format!("Equipped {}! Attack +{bonus}", item.name)
                }
                (ItemKind::Armor, _, Some(bonus)) if bonus != 0 => {
                    player.stats.combat.defense += bonus;
                    format!("Equipped {}! Defense +{bonus}", item.name)
                }
                _ => format!("Picked up {}!", item.name),
            };
            player.inventory.push(item);
            message
        }
    }
}

/// Marks `player` dead once their health is gone. Returns true if so.
pub fn check_player_death(player: &mut Player) -> bool {
    if player.stats.combat.is_depleted() {
        player.is_alive = false;
        return true;
    }
    false
}

pub fn check_enemy_death(enemy: &Enemy) -> bool {
    enemy.stats.is_depleted()
}

/// Pays out the gold for a defeated enemy.
///
/// Experience only appears in the message.
pub fn gain_rewards(player: &mut Player, enemy: &Enemy) -> String {
    player.gold += enemy.gold_reward;
    format!(
        "Defeated {}! Gained {} gold and {} exp!",
        enemy.name, enemy.gold_reward, enemy.exp_reward
    )
}
