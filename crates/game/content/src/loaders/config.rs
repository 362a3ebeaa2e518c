//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GameConfig`] from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so an empty file is valid.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.board_width == 0 || config.board_height == 0 {
            anyhow::bail!(
                "Board must be at least 1x1, got {}x{}",
                config.board_width,
                config.board_height
            );
        }
        if config.max_party_size == 0 || config.max_party_size > GameConfig::MAX_PARTY_SIZE {
            anyhow::bail!(
                "max_party_size must be between 1 and {}, got {}",
                GameConfig::MAX_PARTY_SIZE,
                config.max_party_size
            );
        }

        Ok(config)
    }
}
