use super::{Enemy, Item, Position};

/// What a tile holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    Empty,
    /// Party spawn point on the first level.
    Start,
    Enemy,
    Treasure,
    Event,
    Boss,
    /// Stairs down to the next level.
    Exit,
}

impl TileKind {
    /// Tile kinds that carry an enemy.
    pub fn is_hostile(self) -> bool {
        matches!(self, TileKind::Enemy | TileKind::Boss)
    }
}

/// Category of a scripted tile encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameEventKind {
    Trap,
    Shrine,
    Merchant,
    Mystery,
}

/// Encounter attached to a [`TileKind::Event`] tile.
///
/// Generation never places one yet; stepping on an event tile with no
/// encounter only reveals it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameEvent {
    pub id: String,
    pub kind: GameEventKind,
    pub description: String,
}

/// One grid cell of a board.
///
/// # Invariants
///
/// - `enemy` is only set for [`TileKind::Enemy`] and [`TileKind::Boss`]
/// - `items` is only non-empty for [`TileKind::Treasure`]
/// - `event` is only set for [`TileKind::Event`]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
    pub is_revealed: bool,
    pub enemy: Option<Enemy>,
    pub items: Vec<Item>,
    pub event: Option<GameEvent>,
}

impl Tile {
    /// Creates an unrevealed tile with no contents.
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            is_revealed: false,
            enemy: None,
            items: Vec::new(),
            event: None,
        }
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemy = Some(enemy);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_event(mut self, event: GameEvent) -> Self {
        self.event = Some(event);
        self
    }

    pub fn revealed(mut self) -> Self {
        self.is_revealed = true;
        self
    }

    /// Removes the enemy and degrades the tile to [`TileKind::Empty`].
    pub fn clear_enemy(&mut self) -> Option<Enemy> {
        let enemy = self.enemy.take();
        self.kind = TileKind::Empty;
        enemy
    }

    /// Takes every item off the tile, leaving its kind unchanged.
    pub fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tiles_carry_no_encounter() {
        let tile = Tile::new(Position::new(0, 0), TileKind::Event);
        assert!(tile.event.is_none());

        let tile = tile.with_event(GameEvent {
            id: "event-0-0".into(),
            kind: GameEventKind::Shrine,
            description: "A quiet shrine.".into(),
        });
        assert_eq!(
            tile.event.as_ref().map(|event| event.kind),
            Some(GameEventKind::Shrine)
        );
        assert_eq!(GameEventKind::Mystery.to_string(), "mystery");
    }
}
