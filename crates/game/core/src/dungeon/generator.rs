use crate::config::GameConfig;
use crate::env::{RngStream, SeededRng};
use crate::state::{Board, Position, Tile, TileKind};

use super::enemies::roll_enemy;
use super::loot::roll_loot;

/// Upper bounds of the per-tile roll buckets.
const ENEMY_THRESHOLD: f64 = 0.3;
const TREASURE_THRESHOLD: f64 = 0.45;
const EVENT_THRESHOLD: f64 = 0.55;

/// Builds dungeon levels for a fixed board shape.
#[derive(Clone, Debug, Default)]
pub struct DungeonGenerator {
    config: GameConfig,
}

impl DungeonGenerator {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generates level `depth` for `seed`.
    ///
    /// The stream is seeded from the seed and the depth, so the same inputs
    /// always yield the same board.
    pub fn generate(&self, depth: u32, seed: &str) -> Board {
        let mut rng = SeededRng::for_depth(seed, depth);
        self.generate_with(depth, &mut rng)
    }

    /// Generates level `depth` from an arbitrary random stream.
    pub fn generate_with<R>(&self, depth: u32, rng: &mut R) -> Board
    where
        R: RngStream + ?Sized,
    {
        let width = self.config.board_width;
        let height = self.config.board_height;
        let mut board = Board::new(width, height, depth);

        let start = board.center();
        let boss_floor = self.config.is_boss_floor(depth);
        let exit = Position::new(width as i32 - 1, height as i32 - 1);
        let lair = exit.offset(-1, -1);

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let position = Position::new(x, y);

                let tile = if depth == 1 && position == start {
                    Tile::new(position, TileKind::Start).revealed()
                } else if boss_floor && position == exit {
                    Tile::new(position, TileKind::Exit)
                } else if boss_floor && position == lair {
                    Tile::new(position, TileKind::Boss)
                        .with_enemy(roll_enemy(depth, true, position, rng))
                } else {
                    Self::roll_tile(depth, position, rng)
                };

                board.set_tile(position, tile);
            }
        }

        board
    }

    fn roll_tile<R>(depth: u32, position: Position, rng: &mut R) -> Tile
    where
        R: RngStream + ?Sized,
    {
        let roll = rng.next_f64();

        if roll < ENEMY_THRESHOLD {
            Tile::new(position, TileKind::Enemy).with_enemy(roll_enemy(depth, false, position, rng))
        } else if roll < TREASURE_THRESHOLD {
            Tile::new(position, TileKind::Treasure).with_items(roll_loot(depth, position, rng))
        } else if roll < EVENT_THRESHOLD {
            Tile::new(position, TileKind::Event)
        } else {
            Tile::new(position, TileKind::Empty)
        }
    }
}
