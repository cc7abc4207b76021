//! Error handling for loki.
//! Defines the error taxonomy shared by the resolver, the renderer and the
//! output sink, plus the mapping from error kinds to process exit codes.

use std::io;
use thiserror::Error;

/// Custom error types for loki operations.
///
/// Resolution failures are fatal for the one-shot front end and carry their
/// own exit code. Output failures (`AlreadyExists`, `IoError`) are reported
/// but never change the exit status of a run.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither a filename suffix nor a language token was given
    #[error("No language specified: add an extension to the output file or pass --language.")]
    MissingLanguage,

    /// Both a filename suffix and a language token were given
    #[error("Ambiguous language: the output file '{output}' already has an extension and --language '{token}' was also given.")]
    AmbiguousLanguage { output: String, token: String },

    /// The output path has no file name to attach an extension to
    #[error("Invalid output file name: '{output}'.")]
    InvalidOutput { output: String },

    /// The token or extension is not in the registry
    #[error("Unsupported language: '{token}'.")]
    UnsupportedLanguage { token: String },

    /// The banner font could not be loaded
    #[error("Unsupported font: '{font}'.")]
    UnsupportedFont { font: String },

    /// Refusal to overwrite an existing file
    #[error("File '{path}' already exists. Not writing to it.")]
    AlreadyExists { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A language table violates the registry invariants
    #[error("Invalid language registry: {0}.")]
    InvalidRegistry(String),

    /// Terminal interaction failed
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

impl Error {
    /// Process exit code for this error when it terminates the one-shot run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingLanguage => 1,
            Error::AmbiguousLanguage { .. } => 2,
            Error::UnsupportedLanguage { .. } => 3,
            _ => 1,
        }
    }

    /// Whether the error stems from language resolution.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Error::MissingLanguage
                | Error::AmbiguousLanguage { .. }
                | Error::UnsupportedLanguage { .. }
                | Error::InvalidOutput { .. }
        )
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::PromptError(err.to_string())
    }
}

/// Convenience type alias for Results with loki's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Resolution errors also print the command help, matching the behaviour of
/// a wrong invocation.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    if err.is_resolution_error() {
        crate::cli::print_help();
    }
    std::process::exit(err.exit_code());
}
