//! Delve terminal client.
//!
//! Composition root: reads configuration from the environment (and an
//! optional data directory), sets up file logging, builds a
//! [`runtime::Session`] and hands stdin/stdout to the command loop.
//!
//! ```bash
//! DELVE_SEED=abc DELVE_PARTY="Aria:warrior:human,Bram:cleric:dwarf" cargo run -p delve-client
//! ```
mod command;
mod config;
mod logging;
mod render;
mod repl;

use std::io;

use anyhow::{Context, Result};
use config::CliConfig;
use game_content::ContentFactory;
use game_core::{CharacterCreation, GameConfig, PlayerClass, PlayerRace};
use repl::Repl;
use runtime::{RuntimeConfig, Session, UserHandle};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env()?;
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = config.data_dir.as_ref().map(ContentFactory::new);
    let game = load_game_config(&config, factory.as_ref())?;
    let party = load_party(&config, factory.as_ref())?;
    let players = config
        .players
        .unwrap_or(party.len())
        .min(game.max_party_size);

    tracing::info!(
        width = game.board_width,
        height = game.board_height,
        players,
        "starting delve"
    );

    let mut runtime_config = RuntimeConfig::default().with_game(game);
    if let Some(seed) = &config.seed {
        runtime_config = runtime_config.with_seed(seed);
    }
    let mut session = Session::new(runtime_config);
    if let Some(user) = &config.user {
        session = session.with_user(UserHandle::new(user));
    }

    let stdin = io::stdin();
    Repl::new(session, party, players, stdin.lock(), io::stdout()).run()?;

    tracing::info!("client shutdown complete");
    Ok(())
}

fn load_game_config(config: &CliConfig, factory: Option<&ContentFactory>) -> Result<GameConfig> {
    let mut game = match factory {
        Some(factory) => factory
            .load_config_or_default()
            .with_context(|| format!("loading config from {}", factory.data_dir().display()))?,
        None => GameConfig::default(),
    };
    if let Some(width) = config.width {
        game.board_width = width.max(1);
    }
    if let Some(height) = config.height {
        game.board_height = height.max(1);
    }
    Ok(game)
}

/// `DELVE_PARTY` wins over `party.ron`; with neither, a lone warrior goes in.
fn load_party(
    config: &CliConfig,
    factory: Option<&ContentFactory>,
) -> Result<Vec<CharacterCreation>> {
    if let Some(party) = &config.party {
        return Ok(party.clone());
    }
    if let Some(factory) = factory {
        return factory
            .load_roster()
            .with_context(|| format!("loading party from {}", factory.data_dir().display()));
    }
    Ok(vec![CharacterCreation::new(
        "Hero",
        PlayerClass::Warrior,
        PlayerRace::Human,
    )])
}
