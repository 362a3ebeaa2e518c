//! One dungeon level and positional access to its tiles.

use std::collections::BTreeMap;

use super::{Position, Tile};

/// A single generated dungeon level.
///
/// Every coordinate inside `width x height` has exactly one tile, keyed by its
/// position. A board is replaced wholesale on level transition; no tile
/// survives across depths.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    pub width: u32,
    pub height: u32,
    /// Level number, starting at 1.
    pub depth: u32,
    tiles: BTreeMap<Position, Tile>,
}

impl Board {
    /// Creates a board with no tiles; the generator fills it in.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
            tiles: BTreeMap::new(),
        }
    }

    /// The central tile, where parties arrive.
    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Bounds check: `0 <= x < width` and `0 <= y < height`.
    pub fn is_valid_position(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Looks up a tile. Never-generated coordinates yield `None`.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&position)
    }

    /// Stores `tile` under `position`, replacing any previous tile.
    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        self.tiles.insert(position, tile);
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The four orthogonal neighbours (north, south, east, west).
    ///
    /// Results are not bounds-filtered.
    pub fn adjacent_positions(position: Position) -> [Position; 4] {
        [
            position.offset(0, -1),
            position.offset(0, 1),
            position.offset(1, 0),
            position.offset(-1, 0),
        ]
    }

    /// Marks a single tile as revealed. Returns false if there is no tile.
    pub fn reveal(&mut self, position: Position) -> bool {
        match self.tile_mut(position) {
            Some(tile) => {
                tile.is_revealed = true;
                true
            }
            None => false,
        }
    }

    /// Reveals every in-bounds orthogonal neighbour of `position`.
    ///
    /// Out-of-bounds or missing neighbours are skipped.
    pub fn reveal_adjacent_tiles(&mut self, position: Position) {
        for neighbour in Self::adjacent_positions(position) {
            if self.is_valid_position(neighbour) {
                self.reveal(neighbour);
            }
        }
    }

    /// SHA-256 digest over the canonical binary encoding of the board.
    ///
    /// Identical boards (same tiles, contents and reveal state) always produce
    /// the same digest, which makes generation reproducibility easy to assert
    /// and to log. Fails only if the board cannot be encoded.
    #[cfg(feature = "serde")]
    pub fn fingerprint(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        // bincode serialization is deterministic and BTreeMap iterates in key order
        let bytes = bincode::serialize(self)?;
        Ok(Sha256::digest(&bytes).into())
    }
}
