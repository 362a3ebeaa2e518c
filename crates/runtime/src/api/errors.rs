//! Error types surfaced by the session API.
//!
//! Gameplay rejections are not errors at this level; they end up in the game
//! log. These cover misuse of the session itself.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no game in progress; start one first")]
    NoActiveGame,

    #[error("party size must be between 1 and {max}, got {requested}")]
    InvalidPartySize { requested: usize, max: usize },

    #[error("{requested} players requested but only {available} characters provided")]
    NotEnoughCharacters { requested: usize, available: usize },

    #[error("character {} has an empty name", .index + 1)]
    EmptyName { index: usize },
}
