//! Line editing for the interactive prompt.

use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    Line(String),
    /// Ctrl+C: drop the current line and prompt again.
    Interrupted,
    /// Ctrl+D or end of input.
    Eof,
}

/// Abstraction over the line editing library, so the session loop can be
/// driven by a script in tests.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<ReadResult>;

    fn add_history(&mut self, line: &str);
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)?
            .build();
        Ok(Self {
            editor: DefaultEditor::with_config(config)?,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(err) => Err(err.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
