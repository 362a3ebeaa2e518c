//! Static character content and data-file loaders.
//!
//! This crate houses the character catalog (class stats, class abilities,
//! racial bonuses and passives) and, behind the `loaders` feature, readers for
//! the TOML/RON files a session can be configured from:
//! - Game configuration (`config.toml`)
//! - Party roster (`party.ron`)
//!
//! Catalog lookups are pure and allocate fresh values on every call, so a
//! hero's abilities never share cooldown state with the tables.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    abilities_for_class, base_stats, class_description, create_player, race_description,
    racial_passive,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader};
