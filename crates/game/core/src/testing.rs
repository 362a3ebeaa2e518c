//! Hand-built actors and boards for unit tests.

use crate::state::{
    Abilities, Ability, Board, CharacterCreation, CombatStats, Enemy, GameState, PassiveEffect,
    Player, PlayerClass, PlayerRace, PlayerStats, Position, RacialPassive, Tile, TileKind,
};

pub fn passive() -> RacialPassive {
    RacialPassive::new("test", "Test", "No effect", PassiveEffect::Utility)
}

/// Strike (8 damage, cooldown 2), Mend (heals 15, cooldown 3), Rally (cooldown 1).
pub fn abilities() -> Abilities {
    [
        Ability::new("strike", "Strike", "Hit hard", 2).with_damage(8),
        Ability::new("mend", "Mend", "Patch up", 3).with_healing(15),
        Ability::new("rally", "Rally", "Shout", 1),
    ]
    .into_iter()
    .collect()
}

pub fn hero(name: &str, health: i32, attack: i32, defense: i32) -> Player {
    Player::new(
        format!("player_{}", name.to_lowercase()),
        &CharacterCreation::new(name, PlayerClass::Warrior, PlayerRace::Human),
        PlayerStats::new(health, attack, defense, 5),
        abilities(),
        passive(),
        Position::new(1, 1),
    )
}

pub fn monster(name: &str, health: i32, attack: i32, defense: i32) -> Enemy {
    Enemy {
        id: format!("enemy_{}", name.to_lowercase()),
        name: name.to_string(),
        level: 1,
        stats: CombatStats::new(health, attack, defense),
        position: Position::new(1, 1),
        gold_reward: 15,
        exp_reward: 8,
    }
}

/// A revealed `width x height` board of empty tiles at depth 1.
pub fn open_board(width: u32, height: u32) -> Board {
    let mut board = Board::new(width, height, 1);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let position = Position::new(x, y);
            board.set_tile(position, Tile::new(position, TileKind::Empty).revealed());
        }
    }
    board
}

/// A 3x3 open board with the given heroes, all standing on the centre.
pub fn game(players: Vec<Player>) -> GameState {
    GameState::new(open_board(3, 3), players, "test", 0)
}
