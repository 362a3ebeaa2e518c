//! Character catalog: what a new hero starts with.
//!
//! Every lookup is a total function over the class and race enums and returns
//! a fresh value.

mod classes;
mod races;

pub use classes::{abilities_for_class, class_description, class_stats};
pub use races::{RaceBonus, race_bonus, race_description, racial_passive};

use game_core::{CharacterCreation, Player, PlayerClass, PlayerRace, PlayerStats, Position};

/// Class base stats plus the racial bonus, at full health.
pub fn base_stats(class: PlayerClass, race: PlayerRace) -> PlayerStats {
    race_bonus(race).apply(class_stats(class))
}

/// Builds the hero in roster slot `index` from a creation record.
///
/// The hero gets id `player_{index}`, their class abilities, their racial
/// passive, no loot and no gold.
pub fn create_player(index: usize, creation: &CharacterCreation, position: Position) -> Player {
    Player::new(
        format!("player_{index}"),
        creation,
        base_stats(creation.class, creation.race),
        abilities_for_class(creation.class).into_iter().collect(),
        racial_passive(creation.race),
        position,
    )
}
