//! Line input abstraction.
//!
//! The console loop reads through [`LineEditor`] so tests can script a
//! whole session without a terminal.

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One read from the player.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was read.
    Line(String),
    /// Ctrl-C: drop the current line, keep playing.
    Interrupted,
    /// Ctrl-D or closed stdin: the session is over.
    Eof,
}

/// Abstraction over line reading.
pub trait LineEditor {
    /// Read one line with the given prompt.
    ///
    /// # Errors
    ///
    /// Fails only when the terminal itself does; interrupts and
    /// end-of-input are ordinary [`ReadResult`] values.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Record a line in the editor's history.
    fn add_history(&mut self, line: &str);
}

/// The rustyline-backed editor the binary uses.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    /// # Errors
    ///
    /// Fails when rustyline cannot set up the terminal.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
