/// Turn bookkeeping for a party taking turns in list order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Index into the roster of the hero whose turn it is.
    pub current_player_index: usize,

    /// Round counter, starting at 1. Incremented each time play wraps past
    /// the end of the roster.
    pub turn_number: u32,
}

impl TurnState {
    /// Creates the turn state of a fresh game: first hero, first round.
    pub fn new() -> Self {
        Self {
            current_player_index: 0,
            turn_number: 1,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
