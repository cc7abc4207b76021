//! Header generation pipeline shared by the one-shot and interactive front
//! ends: resolve the language, render the banners, compose and write.

use crate::banner::{banner_sections, BannerRenderer};
use crate::error::Result;
use crate::header::{compose, HeaderBlock};
use crate::language::Registry;
use crate::resolver::{resolve, split_output};
use crate::sink::{write_header, Written};
use chrono::{NaiveDate, Utc};
use log::debug;
use std::path::PathBuf;

/// The five collected fields plus the run options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Target file name, with or without extension
    pub output: String,
    pub author: String,
    pub description: String,
    /// Explicit language token, empty when not given
    pub language: String,
    /// Banner font, empty for the default font
    pub font: String,
    /// Date rendered as an extra banner section
    pub date: Option<NaiveDate>,
}

impl Request {
    /// Sets the date banner to the current UTC date.
    pub fn with_today(mut self) -> Self {
        self.date = Some(Utc::now().date_naive());
        self
    }
}

/// Result of one pipeline run.
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub block: HeaderBlock,
    /// Outcome of the write; failures here do not fail the run.
    pub write: Result<Written>,
}

/// Runs the pipeline once.
///
/// # Errors
/// * Resolution errors (`InvalidOutput`, `MissingLanguage`,
///   `AmbiguousLanguage`, `UnsupportedLanguage`) and `UnsupportedFont`;
///   nothing is written in that case
pub fn generate(
    registry: &Registry,
    renderer: &dyn BannerRenderer,
    request: &Request,
) -> Result<Generated> {
    let resolution = resolve(registry, &request.output, &request.language)?;

    let (stem, _) = split_output(&request.output);
    let name = stem
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| request.output.clone());

    let banners = banner_sections(renderer, &name, &request.author, &request.font, request.date)?;
    let block = compose(resolution.entry, &request.author, &request.description, &banners);
    debug!("Composed {} header lines for '{}'", block.lines().len(), name);

    let write = write_header(&resolution.path, &block);

    Ok(Generated { path: resolution.path, block, write })
}
