//! Session layer for the dungeon crawl.
//!
//! This crate sits between a front end and the pure engine in `game-core`.
//! A [`Session`] owns the running game and its log, builds the party from the
//! character catalog in `game-content`, and funnels every intent through
//! [`game_core::apply`] so the stored state is only replaced by whole
//! snapshots.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session itself
//! - [`api`] exposes the error and identity types clients interact with
//! - [`config`] carries the session configuration
//! - [`log`] holds the append-only game log
pub mod api;
pub mod config;
pub mod log;
pub mod session;

pub use api::{Result, SessionError, UserHandle};
pub use config::RuntimeConfig;
pub use log::GameLog;
pub use session::Session;
