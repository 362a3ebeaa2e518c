//! Content factory for loading every data file from one directory.

use std::path::{Path, PathBuf};

use game_core::{CharacterCreation, GameConfig};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── party.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Like [`Self::load_config`], but a missing file means defaults.
    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(GameConfig::default())
        }
    }

    /// Load the party roster from `party.ron`.
    pub fn load_roster(&self) -> LoadResult<Vec<CharacterCreation>> {
        let path = self.data_dir.join("party.ron");
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_both_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("config.toml"), "board_width = 8\nboard_height = 6\n")
            .expect("write config");
        fs::write(
            dir.path().join("party.ron"),
            r#"(party: [(name: "Aria", class: Mage, race: Elf)])"#,
        )
        .expect("write roster");

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().expect("config");
        let roster = factory.load_roster().expect("roster");

        assert_eq!((config.board_width, config.board_height), (8, 6));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "Aria");
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ContentFactory::new(dir.path());

        assert_eq!(
            factory.load_config_or_default().expect("defaults"),
            GameConfig::default()
        );
        assert!(factory.load_config().is_err());
        assert!(factory.load_roster().is_err());
    }
}
