//! Party roster loader.

use std::path::Path;

use game_core::CharacterCreation;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Party roster structure for RON files.
///
/// ```ron
/// (
///     party: [
///         (name: "Aria", class: Cleric, race: Dwarf),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub party: Vec<CharacterCreation>,
}

/// Loader for party rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the characters listed in a RON roster file, in roster order.
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterCreation>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CharacterCreation>> {
        let roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        Ok(roster.party)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{PlayerClass, PlayerRace};

    use super::*;

    #[test]
    fn parses_party_in_order() {
        let party = RosterLoader::parse(
            r#"(
                party: [
                    (name: "Aria", class: Cleric, race: Dwarf),
                    (name: "Bram", class: Ranger, race: Halfling),
                ],
            )"#,
        )
        .expect("valid roster");

        assert_eq!(
            party,
            vec![
                CharacterCreation::new("Aria", PlayerClass::Cleric, PlayerRace::Dwarf),
                CharacterCreation::new("Bram", PlayerClass::Ranger, PlayerRace::Halfling),
            ]
        );
    }

    #[test]
    fn unknown_class_is_an_error() {
        let error = RosterLoader::parse(r#"(party: [(name: "X", class: Bard, race: Elf)])"#)
            .unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse roster RON"));
    }
}
