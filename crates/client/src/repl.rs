//! Line-oriented game loop.
use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::CharacterCreation;
use runtime::Session;

use crate::command::{Command, HELP};
use crate::render;

/// Reads commands from `input` and writes the game to `output`.
pub struct Repl<R, W> {
    session: Session,
    party: Vec<CharacterCreation>,
    players: usize,
    input: R,
    output: W,
    /// Log lines already echoed to `output`.
    shown: usize,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(
        session: Session,
        party: Vec<CharacterCreation>,
        players: usize,
        input: R,
        output: W,
    ) -> Self {
        Self {
            session,
            party,
            players,
            input,
            output,
            shown: 0,
        }
    }

    /// Plays until `quit` or end of input.
    pub fn run(mut self) -> Result<Session> {
        self.start()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command)?,
                Err(error) => writeln!(self.output, "{error}")?,
            }
        }

        writeln!(self.output, "Farewell.")?;
        Ok(self.session)
    }

    fn start(&mut self) -> Result<()> {
        self.session.start_game(&self.party, self.players)?;
        self.shown = 0;
        self.flush_log()?;
        self.print_status()
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Act(action) => {
                tracing::debug!(action = action.as_snake_case(), "command");
                self.session.dispatch(action)?;
                self.flush_log()?;
                if self.session.state().is_some_and(|state| state.is_game_over) {
                    writeln!(self.output, "Type `reset` to try again or `quit` to leave.")?;
                }
            }
            Command::Status => self.print_status()?,
            Command::Log => {
                for line in self.session.recent_log() {
                    writeln!(self.output, "{line}")?;
                }
            }
            Command::Reset => {
                self.session.reset_game();
                self.start()?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Echoes log lines added since the last call.
    fn flush_log(&mut self) -> Result<()> {
        let entries = self.session.log().entries();
        for line in entries.get(self.shown..).unwrap_or_default() {
            writeln!(self.output, "{line}")?;
        }
        self.shown = entries.len();
        Ok(())
    }

    fn print_status(&mut self) -> Result<()> {
        if let Some(state) = self.session.state() {
            writeln!(self.output, "{}", render::status(state))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use game_core::{GameConfig, PlayerClass, PlayerRace};
    use runtime::RuntimeConfig;

    use super::*;

    fn play(script: &str) -> (Session, String) {
        let config = RuntimeConfig::default()
            .with_seed("repl")
            .with_game(GameConfig::with_board_size(1, 1));
        let party = vec![CharacterCreation::new(
            "Aria",
            PlayerClass::Warrior,
            PlayerRace::Human,
        )];

        let mut output = Vec::new();
        let session = Repl::new(
            Session::new(config),
            party,
            1,
            Cursor::new(script.to_string()),
            &mut output,
        )
        .run()
        .expect("repl runs");
        (session, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn echoes_new_log_lines() {
        let (session, output) = play("attack\nability 1\nquit\nattack\n");

        assert!(output.starts_with("Game started with 1 players!\nLevel 1 | Turn 1"));
        assert!(output.contains("No enemy to attack here!\n"));
        assert!(output.contains("Aria used Cleave!\n"));
        assert!(output.ends_with("Farewell.\n"));
        // input after quit is never read
        assert_eq!(session.log().len(), 3);
    }

    #[test]
    fn bad_input_is_explained() {
        let (_, output) = play("jump\nability x\n");
        assert!(output.contains("unknown command `jump`"));
        assert!(output.contains("usage: ability <1-3>"));
    }

    #[test]
    fn reset_starts_a_fresh_game() {
        let (session, output) = play("ability 1\nreset\n");

        assert_eq!(output.matches("Game started with 1 players!").count(), 2);
        let state = session.state().expect("running");
        assert_eq!(state.turn.turn_number, 1);
        assert!(state.players[0].abilities[0].is_ready());
        assert_eq!(session.log().entries(), ["Game started with 1 players!"]);
    }
}
