//! Loki generates decorative headers for new script files: a shebang line,
//! FIGlet banners of the script name, author and date, and a description,
//! all commented out in the target language.

/// ASCII-art banner rendering behind a renderer trait
pub mod banner;

/// Command-line interface module for the loki application
pub mod cli;

/// Common constants: fonts, font directories, date format
pub mod constants;

/// Error types and handling for the loki application
pub mod error;

/// Interactive five-field header form
pub mod form;

/// Resolve, render, compose and write pipeline
pub mod generator;

/// Header block composition
pub mod header;

/// Language registry: names, aliases, extensions, shebangs, comment markers
pub mod language;

/// Logger initialization
pub mod logger;

/// Terminal and confirmation prompt seams
pub mod prompt;

/// Language resolution from output file names and explicit tokens
pub mod resolver;

/// Writes headers to new executable files
pub mod sink;
