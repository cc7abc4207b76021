//! User interaction seams.
//! [`FormTerminal`] feeds keystrokes to the interactive form and displays it;
//! [`Prompter`] asks yes/no questions. Both have terminal-backed
//! implementations built on `console` and `dialoguer`.

use crate::error::{Error, Result};
use console::{Key, Term};
use dialoguer::Confirm;

/// A keystroke as seen by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Left,
    Up,
    Enter,
    Escape,
    Other,
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        match key {
            Key::Char(c) if !c.is_control() => KeyInput::Char(c),
            Key::Backspace => KeyInput::Backspace,
            Key::ArrowLeft => KeyInput::Left,
            Key::ArrowUp => KeyInput::Up,
            Key::Enter => KeyInput::Enter,
            Key::Escape => KeyInput::Escape,
            _ => KeyInput::Other,
        }
    }
}

/// Keystroke source and display of the interactive form.
pub trait FormTerminal {
    /// Blocks until the next keystroke.
    fn read_key(&mut self) -> Result<KeyInput>;

    /// Replaces the displayed form with `view`.
    fn draw(&mut self, view: &str) -> Result<()>;
}

/// [`FormTerminal`] on the process terminal.
pub struct ConsoleTerminal {
    term: Term,
    drawn_lines: usize,
}

impl ConsoleTerminal {
    pub fn new() -> Self {
        Self { term: Term::stdout(), drawn_lines: 0 }
    }
}

impl Default for ConsoleTerminal {
    fn default() -> Self {
        ConsoleTerminal::new()
    }
}

impl FormTerminal for ConsoleTerminal {
    fn read_key(&mut self) -> Result<KeyInput> {
        let key = self.term.read_key().map_err(|e| Error::PromptError(e.to_string()))?;
        Ok(key.into())
    }

    fn draw(&mut self, view: &str) -> Result<()> {
        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines)?;
        }
        self.term.write_line(view)?;
        self.drawn_lines = view.lines().count().max(1);
        Ok(())
    }
}

/// Asks the user yes/no questions.
pub trait Prompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// [`Prompter`] backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}
