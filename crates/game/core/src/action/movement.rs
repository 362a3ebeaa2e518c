use crate::action::{ActionError, ActionTransition};
use crate::combat::pickup_item;
use crate::env::GameEnv;
use crate::state::{Board, GameState, Position, TileKind};

/// Screen-space direction: north is up, so it decreases `y`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CardinalDirection {
    #[strum(to_string = "north", serialize = "n")]
    North,
    #[strum(to_string = "south", serialize = "s")]
    South,
    #[strum(to_string = "east", serialize = "e")]
    East,
    #[strum(to_string = "west", serialize = "w")]
    West,
}

impl CardinalDirection {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

/// What a successful move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    /// Where the mover stepped, on the board they started on.
    pub destination: Position,
    /// New depth when the move hit the exit.
    pub descended_to: Option<u32>,
}

/// The current hero steps one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MoveAction {
    type Error = ActionError;
    type Result = MoveResult;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let player = super::acting_player(state)?;
        if !player.is_alive {
            return Err(ActionError::DeadCannotMove {
                name: player.name.clone(),
            });
        }

        let destination = self.destination_from(player.position);
        if !state.board.is_valid_position(destination) {
            return Err(ActionError::OutOfBounds { destination });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        log: &mut Vec<String>,
    ) -> Result<Self::Result, Self::Error> {
        let index = state.turn.current_player_index;
        let player = state
            .players
            .get_mut(index)
            .ok_or(ActionError::NoCurrentPlayer { index })?;

        let destination = self.destination_from(player.position);
        player.position = destination;

        state.board.reveal(destination);
        state.board.reveal_adjacent_tiles(destination);

        let mut result = MoveResult {
            destination,
            descended_to: None,
        };

        let Some(tile) = state.board.tile_mut(destination) else {
            return Ok(result);
        };

        let kind = tile.kind;
        match kind {
            TileKind::Enemy | TileKind::Boss => {
                if let Some(enemy) = &tile.enemy {
                    log.push(format!("{} encountered a {}!", player.name, enemy.name));
                }
            }
            TileKind::Treasure => {
                for item in tile.take_items() {
                    log.push(pickup_item(player, item));
                }
            }
            TileKind::Exit => {
                log.push(format!("{} found the exit! Descending deeper...", player.name));
                let depth = state.board.depth + 1;
                descend(state, env, depth);
                log.push(format!("Now on level {depth}!"));
                result.descended_to = Some(depth);
            }
            TileKind::Empty | TileKind::Start | TileKind::Event => {}
        }

        Ok(result)
    }
}

/// Replaces the board with level `depth` and gathers the whole party,
/// living or not, on its centre.
fn descend(state: &mut GameState, env: &GameEnv<'_>, depth: u32) {
    let board: Board = env.generator().generate(depth, &state.seed);
    let arrival = board.center();
    state.board = board;

    for player in &mut state.players {
        player.position = arrival;
    }

    state.board.reveal(arrival);
    state.board.reveal_adjacent_tiles(arrival);
}
