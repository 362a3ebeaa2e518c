/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width of every generated level, in tiles.
    pub board_width: u32,
    /// Height of every generated level, in tiles.
    pub board_height: u32,
    /// Boss floors (and their exit) appear on depths that are a multiple of this.
    pub boss_interval: u32,
    /// Largest party accepted at game start.
    pub max_party_size: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Abilities carried by every hero (one fixed set of three per class).
    pub const MAX_ABILITIES: usize = 3;
    /// Hard upper bound on the party size.
    pub const MAX_PARTY_SIZE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_WIDTH: u32 = 10;
    pub const DEFAULT_BOARD_HEIGHT: u32 = 10;
    pub const DEFAULT_BOSS_INTERVAL: u32 = 5;

    pub fn new() -> Self {
        Self {
            board_width: Self::DEFAULT_BOARD_WIDTH,
            board_height: Self::DEFAULT_BOARD_HEIGHT,
            boss_interval: Self::DEFAULT_BOSS_INTERVAL,
            max_party_size: Self::MAX_PARTY_SIZE,
        }
    }

    pub fn with_board_size(board_width: u32, board_height: u32) -> Self {
        Self {
            board_width,
            board_height,
            ..Self::new()
        }
    }

    /// Returns true when `depth` is a boss floor.
    ///
    /// Depth 1 never is, regardless of the interval.
    pub fn is_boss_floor(&self, depth: u32) -> bool {
        depth > 1 && self.boss_interval > 0 && depth % self.boss_interval == 0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
