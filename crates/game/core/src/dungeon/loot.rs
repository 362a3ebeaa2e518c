//! Loot tables for treasure rooms.

use crate::env::RngStream;
use crate::state::{Item, Position};

/// Weapon names and base attack bonuses; the floor depth is added on top.
pub const WEAPONS: [(&str, i32); 5] = [
    ("Sword", 2),
    ("Axe", 3),
    ("Mace", 2),
    ("Spear", 2),
    ("Dagger", 1),
];

/// Armor names and base defense bonuses; the floor depth is added on top.
pub const ARMORS: [(&str, i32); 4] = [
    ("Shield", 1),
    ("Helm", 1),
    ("Leather Armor", 1),
    ("Chainmail", 2),
];

/// Rolls the 1 to 3 items found on a treasure tile.
pub fn roll_loot<R>(depth: u32, position: Position, rng: &mut R) -> Vec<Item>
where
    R: RngStream + ?Sized,
{
    let count = rng.next_int(1, 3);
    (0..count)
        .map(|slot| {
            let id = |kind: &str| format!("{kind}_{depth}_{}_{}_{slot}", position.x, position.y);
            roll_item(depth, id, rng)
        })
        .collect()
}

fn roll_item<R, F>(depth: u32, id: F, rng: &mut R) -> Item
where
    R: RngStream + ?Sized,
    F: Fn(&str) -> String,
{
    let scale = depth as i32;
    let roll = rng.next_f64();

    if roll < 0.3 {
        let (name, bonus) = pick(&WEAPONS, rng);
        Item::weapon(id("weapon"), format!("{name} +{depth}"), bonus + scale, 20 + depth * 10)
    } else if roll < 0.6 {
        let (name, bonus) = pick(&ARMORS, rng);
        Item::armor(id("armor"), format!("{name} +{depth}"), bonus + scale, 15 + depth * 8)
    } else if roll < 0.9 {
        Item::potion(id("potion"), "Health Potion", 20 + scale * 5, 10)
    } else {
        Item::treasure(id("treasure"), "Gold Coins", 50 + depth * 20)
    }
}

fn pick<R>(table: &[(&'static str, i32)], rng: &mut R) -> (&'static str, i32)
where
    R: RngStream + ?Sized,
{
    table[rng.next_int(0, table.len() as i32 - 1) as usize]
}
