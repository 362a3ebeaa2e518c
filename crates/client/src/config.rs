//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use game_core::{CharacterCreation, PlayerClass, PlayerRace};

/// Everything the terminal client needs before a game can start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub seed: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub party: Option<Vec<CharacterCreation>>,
    pub players: Option<usize>,
    pub user: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DELVE_SEED` - Fixed dungeon seed (default: current time)
    /// - `DELVE_WIDTH` / `DELVE_HEIGHT` - Board size, overriding `config.toml`
    /// - `DELVE_PARTY` - Roster as `name:class:race,...`, overriding `party.ron`
    /// - `DELVE_PLAYERS` - How many roster entries to play (default: all)
    /// - `DELVE_USER` - Player handle recorded in the logs
    /// - `DELVE_DATA_DIR` - Directory holding `config.toml` and `party.ron`
    /// - `DELVE_LOG_DIR` - Directory for the log file (default: platform cache)
    pub fn from_env() -> Result<Self> {
        let party = match env::var("DELVE_PARTY") {
            Ok(raw) => Some(parse_party(&raw).context("invalid DELVE_PARTY")?),
            Err(_) => None,
        };

        Ok(Self {
            seed: env::var("DELVE_SEED").ok().filter(|seed| !seed.is_empty()),
            width: read_env("DELVE_WIDTH"),
            height: read_env("DELVE_HEIGHT"),
            party,
            players: read_env("DELVE_PLAYERS"),
            user: env::var("DELVE_USER").ok(),
            data_dir: env::var("DELVE_DATA_DIR").ok().map(PathBuf::from),
            log_dir: env::var("DELVE_LOG_DIR").ok().map(PathBuf::from),
        })
    }
}

/// Parses a roster written as `name:class:race` entries separated by commas.
///
/// Class and race names are case-insensitive.
pub fn parse_party(raw: &str) -> Result<Vec<CharacterCreation>> {
    let mut party = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let fields: Vec<&str> = entry.split(':').map(str::trim).collect();
        let [name, class, race] = fields[..] else {
            bail!("expected name:class:race, got `{entry}`");
        };
        let class: PlayerClass = class
            .parse()
            .map_err(|_| anyhow!("unknown class `{class}`"))?;
        let race: PlayerRace = race
            .parse()
            .map_err(|_| anyhow!("unknown race `{race}`"))?;
        party.push(CharacterCreation::new(name, class, race));
    }

    if party.is_empty() {
        bail!("party is empty");
    }
    Ok(party)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
