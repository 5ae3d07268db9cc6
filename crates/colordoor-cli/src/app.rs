//! The console session.

use std::io::Write;

use anyhow::Result;
use colordoor_core::command::COMMAND_SUMMARY;
use colordoor_core::{Command, GameLoop, GameLoopResult, GameState};

use crate::input::{LineEditor, ReadResult};

/// Owns the game loop, the line editor, and the output sink.
///
/// Generic over both ends so tests can run a whole session against a
/// scripted editor and a byte buffer.
pub struct App<E, W> {
    game: GameLoop,
    editor: E,
    out: W,
    banner: bool,
}

impl<E: LineEditor, W: Write> App<E, W> {
    pub fn new(state: GameState, editor: E, out: W) -> Self {
        Self {
            game: GameLoop::new(state),
            editor,
            out,
            banner: true,
        }
    }

    /// Skip the welcome banner.
    pub fn without_banner(mut self) -> Self {
        self.banner = false;
        self
    }

    /// Run the session until the player quits or input ends.
    ///
    /// # Errors
    ///
    /// Only terminal and write failures surface here; gameplay itself
    /// never errors.
    pub fn run(&mut self) -> Result<()> {
        if self.banner {
            writeln!(self.out, "Welcome to the Color Door Adventure!")?;
            for line in COMMAND_SUMMARY {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;
        }

        loop {
            writeln!(self.out)?;
            for line in self.game.state().describe_current_room() {
                writeln!(self.out, "{line}")?;
            }
            writeln!(self.out)?;

            let command = match self.editor.read_line("> ")? {
                ReadResult::Line(line) => {
                    self.editor.add_history(&line);
                    Command::parse(&line)
                }
                ReadResult::Interrupted => continue,
                // Closed input ends the session like a typed "quit".
                ReadResult::Eof => Command::Quit,
            };

            let result = self.game.tick(command);
            for message in self.game.state_mut().take_messages() {
                writeln!(self.out, "{message}")?;
            }
            if result == GameLoopResult::PlayerQuit {
                return Ok(());
            }
        }
    }

    pub fn game(&self) -> &GameLoop {
        &self.game
    }
}
