/// Loot categories found in treasure rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Equipped on pickup; adds its attack bonus permanently.
    Weapon,
    /// Equipped on pickup; adds its defense bonus permanently.
    Armor,
    /// Consumed on pickup; restores health.
    Potion,
    /// Converted straight into gold.
    Treasure,
}

/// A single piece of loot.
///
/// Only the bonus matching `kind` is populated: weapons carry `attack_bonus`,
/// armor `defense_bonus`, potions `heal_amount`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub attack_bonus: Option<i32>,
    pub defense_bonus: Option<i32>,
    pub heal_amount: Option<i32>,
    /// Worth in gold.
    pub value: u32,
}

impl Item {
    pub fn weapon(
        id: impl Into<String>,
        name: impl Into<String>,
        attack_bonus: i32,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Weapon,
            attack_bonus: Some(attack_bonus),
            defense_bonus: None,
            heal_amount: None,
            value,
        }
    }

    pub fn armor(
        id: impl Into<String>,
        name: impl Into<String>,
        defense_bonus: i32,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Armor,
            attack_bonus: None,
            defense_bonus: Some(defense_bonus),
            heal_amount: None,
            value,
        }
    }

    pub fn potion(
        id: impl Into<String>,
        name: impl Into<String>,
        heal_amount: i32,
        value: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Potion,
            attack_bonus: None,
            defense_bonus: None,
            heal_amount: Some(heal_amount),
            value,
        }
    }

    pub fn treasure(id: impl Into<String>, name: impl Into<String>, value: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: ItemKind::Treasure,
            attack_bonus: None,
            defense_bonus: None,
            heal_amount: None,
            value,
        }
    }
}
