//! Damage calculation and application.

use super::Combatant;

/// Every landed hit deals at least this much.
pub const MIN_DAMAGE: i32 = 1;

/// Damage of a raw value against a defense stat.
///
/// ```text
/// damage = max(MIN_DAMAGE, raw - defense)
/// ```
pub fn calculate_damage(raw: i32, defense: i32) -> i32 {
    (raw - defense).max(MIN_DAMAGE)
}

/// Resolves one basic attack and returns the damage dealt.
///
/// The defender's health is floored at zero; death bookkeeping is left to the
/// caller.
pub fn perform_attack<A, D>(attacker: &A, defender: &mut D) -> i32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let damage = calculate_damage(attacker.stats().attack, defender.stats().defense);
    defender.stats_mut().take_damage(damage);
    damage
}
