//! Parsing of typed commands.
use std::str::FromStr;

use game_core::{Action, CardinalDirection};
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A turn-taking action for the current hero.
    Act(Action),
    Status,
    Log,
    /// Abandon the run and start over with the same party.
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("type a command (`help` lists them)")]
    Empty,

    #[error("unknown command `{0}` (`help` lists them)")]
    Unknown(String),

    #[error("usage: ability <1-3>")]
    AbilitySlot,
}

pub const HELP: &str = "\
commands:
  n | s | e | w      move the current hero
  attack             strike the enemy on your tile
  ability <n>        use ability n (1-3)
  status             show the party and the current tile
  log                show the recent log
  reset              start over with the same party
  quit               leave the dungeon";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let head = head.to_ascii_lowercase();

        if let Ok(direction) = head.parse::<CardinalDirection>() {
            return Ok(Self::Act(Action::Move(direction)));
        }

        let command = match head.as_str() {
            "a" | "attack" => Self::Act(Action::Attack),
            "ab" | "ability" => {
                let slot = words
                    .next()
                    .and_then(|word| word.parse::<usize>().ok())
                    .filter(|slot| *slot > 0)
                    .ok_or(CommandError::AbilitySlot)?;
                Self::Act(Action::UseAbility(slot - 1))
            }
            "status" | "st" => Self::Status,
            "log" | "l" => Self::Log,
            "reset" => Self::Reset,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(head)),
        };
        Ok(command)
    }
}
