//! Interactive header form.
//! A five-step text editor: one field is active at a time, keystrokes edit
//! it and Enter moves on. The state machine is independent of the terminal;
//! [`run_form`] drives it through the [`FormTerminal`] and [`Prompter`] seams.

use crate::banner::BannerRenderer;
use crate::constants::SUPPORTED_FONTS;
use crate::error::{Error, Result};
use crate::generator::{generate, Generated, Request};
use crate::language::Registry;
use crate::prompt::{FormTerminal, KeyInput, Prompter};
use crate::resolver::resolve;
use log::debug;

/// Form fields in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ScriptName,
    Author,
    Description,
    Language,
    Font,
}

impl Field {
    pub const ALL: [Field; 5] =
        [Field::ScriptName, Field::Author, Field::Description, Field::Language, Field::Font];

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// What the form wants after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Still editing
    Editing,
    /// All fields are filled in and valid
    Submitted,
    /// The user left the form
    Quit,
}

#[derive(Debug, Clone)]
pub struct Form {
    values: [String; 5],
    step: usize,
    error: Option<String>,
    /// Fonts accepted in the font field
    fonts: Vec<String>,
}

impl Default for Form {
    fn default() -> Self {
        Form::with_fonts(SUPPORTED_FONTS.iter().map(|f| f.to_string()).collect())
    }
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form accepting only `fonts`, typically [`BannerRenderer::fonts`].
    pub fn with_fonts(fonts: Vec<String>) -> Self {
        Self { values: Default::default(), step: 0, error: None, fonts }
    }

    pub fn active(&self) -> Field {
        Field::ALL[self.step.min(Field::ALL.len() - 1)]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn label(&self, field: Field) -> String {
        match field {
            Field::ScriptName => "Enter your script name: ".to_string(),
            Field::Author => "Enter your name or alias: ".to_string(),
            Field::Description => "Enter script description: ".to_string(),
            Field::Language => "Enter script language: ".to_string(),
            Field::Font => format!("Enter font for ASCII art ({}): ", self.fonts.join(", ")),
        }
    }

    /// Applies one keystroke.
    pub fn update(&mut self, key: KeyInput, registry: &Registry) -> FormEvent {
        let step = self.active().index();
        match key {
            KeyInput::Escape => return FormEvent::Quit,
            KeyInput::Backspace | KeyInput::Left => {
                self.values[step].pop();
            }
            KeyInput::Up => self.step = step.saturating_sub(1),
            KeyInput::Char(c) => self.values[step].push(c),
            KeyInput::Enter => {
                if step + 1 < Field::ALL.len() {
                    self.step = step + 1;
                    return FormEvent::Editing;
                }
                return match self.validate(registry) {
                    Ok(()) => {
                        self.error = None;
                        FormEvent::Submitted
                    }
                    Err(e) => {
                        self.reject(&e, registry);
                        FormEvent::Editing
                    }
                };
            }
            KeyInput::Other => {}
        }
        FormEvent::Editing
    }

    /// Moves to the field responsible for `err` and shows its message.
    pub fn reject(&mut self, err: &Error, registry: &Registry) {
        self.step = self.field_for(err).index();
        self.error = Some(self.hint(err, registry));
    }

    /// The field whose value caused `err`.
    pub fn field_for(&self, err: &Error) -> Field {
        let language = self.value(Field::Language).trim();
        match err {
            Error::InvalidOutput { .. } => Field::ScriptName,
            Error::UnsupportedLanguage { .. } if language.is_empty() => Field::ScriptName,
            Error::MissingLanguage
            | Error::AmbiguousLanguage { .. }
            | Error::UnsupportedLanguage { .. } => Field::Language,
            _ => Field::Font,
        }
    }

    /// Runs the script name and language through the resolver, as the
    /// one-shot front end does, and checks the font against the accepted
    /// fonts.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        resolve(registry, self.value(Field::ScriptName).trim(), self.value(Field::Language))?;

        let font = self.value(Field::Font).trim();
        if !font.is_empty() && !self.fonts.iter().any(|f| f.eq_ignore_ascii_case(font)) {
            return Err(Error::UnsupportedFont { font: font.to_string() });
        }

        Ok(())
    }

    /// The collected fields as a pipeline request.
    pub fn request(&self) -> Request {
        Request {
            output: self.value(Field::ScriptName).trim().to_string(),
            author: self.value(Field::Author).to_string(),
            description: self.value(Field::Description).to_string(),
            language: self.value(Field::Language).trim().to_string(),
            font: self.value(Field::Font).trim().to_lowercase(),
            date: None,
        }
    }

    /// Renders the active prompt, preceded by the pending error if any.
    pub fn view(&self) -> String {
        let field = self.active();
        let prompt = format!("{}{}", self.label(field), self.value(field));
        match &self.error {
            Some(error) => format!("{}\n{}", error, prompt),
            None => prompt,
        }
    }

    /// Error message with the accepted values appended.
    fn hint(&self, err: &Error, registry: &Registry) -> String {
        match err {
            Error::UnsupportedLanguage { .. } => {
                let known: Vec<&str> = registry.entries().map(|e| e.name.as_str()).collect();
                format!("{} Please choose from: {}", err, known.join(", "))
            }
            Error::AmbiguousLanguage { .. } => {
                format!("{} Clear the language, or press Up to drop the extension.", err)
            }
            Error::UnsupportedFont { .. } => {
                format!("{} Please choose from: {}", err, self.fonts.join(", "))
            }
            _ => err.to_string(),
        }
    }
}

/// A completed form run.
#[derive(Debug)]
pub struct Submission {
    pub generated: Generated,
    /// Whether the user asked to also print the header
    pub print: bool,
}

/// Runs the interactive form until a header is generated or the user quits.
///
/// Validation and pipeline errors are shown on the form, which moves to the
/// field that caused them. Write failures are carried in
/// [`Generated::write`].
pub fn run_form(
    registry: &Registry,
    renderer: &dyn BannerRenderer,
    terminal: &mut dyn FormTerminal,
    prompter: &dyn Prompter,
) -> Result<Option<Submission>> {
    let mut form = Form::with_fonts(renderer.fonts());

    loop {
        terminal.draw(&form.view())?;
        let key = terminal.read_key()?;
        match form.update(key, registry) {
            FormEvent::Editing => continue,
            FormEvent::Quit => {
                debug!("Interactive form closed by the user");
                return Ok(None);
            }
            FormEvent::Submitted => {}
        }

        let mut request = form.request();
        if prompter.confirm("Add the current date to the header?", false)? {
            request = request.with_today();
        }
        let print = prompter.confirm("Print the header to the console?", false)?;

        match generate(registry, renderer, &request) {
            Ok(generated) => return Ok(Some(Submission { generated, print })),
            Err(e) => {
                debug!("Form submission rejected: {}", e);
                form.reject(&e, registry);
            }
        }
    }
}
