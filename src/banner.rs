//! ASCII-art banner rendering.
//! The renderer itself is an external collaborator hidden behind the
//! [`BannerRenderer`] trait; [`FigletRenderer`] adapts the `figlet-rs` crate.

use crate::constants::{DATE_FORMAT, DEFAULT_FONT, FONT_DIRS, FONT_EXTENSION, SUPPORTED_FONTS};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use figlet_rs::FIGfont;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Trait for text-to-banner engines.
pub trait BannerRenderer {
    /// Renders `text` in `font` and returns the banner rows.
    fn render(&self, text: &str, font: &str) -> Result<Vec<String>>;

    /// Fonts of the allow-list this renderer can draw.
    fn fonts(&self) -> Vec<String> {
        SUPPORTED_FONTS.iter().map(|f| f.to_string()).collect()
    }
}

/// FIGlet-based banner renderer.
pub struct FigletRenderer {
    /// Directories searched for `<font>.flf`
    font_dirs: Vec<PathBuf>,
}

impl FigletRenderer {
    pub fn new() -> Self {
        Self { font_dirs: FONT_DIRS.iter().map(PathBuf::from).collect() }
    }

    pub fn with_font_dirs<I, P>(font_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self { font_dirs: font_dirs.into_iter().map(|p| p.as_ref().to_path_buf()).collect() }
    }

    /// Locates and loads a font.
    ///
    /// # Errors
    /// * `Error::UnsupportedFont` if the font is neither built in, an existing
    ///   `.flf` file, nor present in one of the font directories
    pub fn load_font(&self, font: &str) -> Result<FIGfont> {
        let font = font.trim();
        let unsupported = || Error::UnsupportedFont { font: font.to_string() };

        if font.is_empty() || font.eq_ignore_ascii_case(DEFAULT_FONT) {
            return FIGfont::standard().map_err(|e| {
                debug!("Loading the built-in font failed: {}", e);
                unsupported()
            });
        }

        let direct = Path::new(font);
        let candidates = std::iter::once(direct.to_path_buf())
            .filter(|p| p.extension().is_some_and(|ext| ext == FONT_EXTENSION))
            .chain(
                self.font_dirs
                    .iter()
                    .map(|dir| dir.join(format!("{}.{}", font, FONT_EXTENSION))),
            );

        for candidate in candidates {
            if !candidate.is_file() {
                continue;
            }
            let Some(candidate_str) = candidate.to_str() else {
                continue;
            };
            debug!("Loading font from {}", candidate.display());
            match FIGfont::from_file(candidate_str) {
                Ok(figfont) => return Ok(figfont),
                Err(e) => debug!("Font file {} is invalid: {}", candidate.display(), e),
            }
        }

        Err(unsupported())
    }
}

impl Default for FigletRenderer {
    fn default() -> Self {
        FigletRenderer::new()
    }
}

impl BannerRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str) -> Result<Vec<String>> {
        let figfont = self.load_font(font)?;
        // An empty text renders as an empty banner.
        if text.is_empty() {
            return Ok(Vec::new());
        }
        // Characters missing from the font are skipped; with none left the
        // text goes in as a plain row.
        match figfont.convert(text) {
            Some(figure) => Ok(figure.to_string().lines().map(str::to_string).collect()),
            None => {
                warn!("Font '{}' has no glyphs for '{}', using plain text", font, text);
                Ok(vec![text.to_string()])
            }
        }
    }

    fn fonts(&self) -> Vec<String> {
        SUPPORTED_FONTS
            .iter()
            .filter(|font| self.load_font(font).is_ok())
            .map(|font| font.to_string())
            .collect()
    }
}

/// Renders the banner sections of a header in their fixed order: script name,
/// `By {author}`, then the date when given.
pub fn banner_sections(
    renderer: &dyn BannerRenderer,
    name: &str,
    author: &str,
    font: &str,
    date: Option<NaiveDate>,
) -> Result<Vec<Vec<String>>> {
    let mut sections = vec![
        renderer.render(name, font)?,
        renderer.render(&format!("By {}", author), font)?,
    ];
    if let Some(date) = date {
        sections.push(renderer.render(&date.format(DATE_FORMAT).to_string(), font)?);
    }

    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_renders_rows() {
        let renderer = FigletRenderer::with_font_dirs(Vec::<PathBuf>::new());
        let rows = renderer.render("hi", "standard").unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().any(|row| !row.trim().is_empty()));
    }

    #[test]
    fn test_text_without_glyphs_is_plain_row() {
        let renderer = FigletRenderer::with_font_dirs(Vec::<PathBuf>::new());
        assert_eq!(renderer.render("שלום", "").unwrap(), vec!["שלום".to_string()]);
    }

    #[test]
    fn test_unknown_font_is_unsupported() {
        let renderer = FigletRenderer::with_font_dirs(Vec::<PathBuf>::new());
        match renderer.render("hi", "no-such-font") {
            Err(Error::UnsupportedFont { font }) => assert_eq!(font, "no-such-font"),
            other => panic!("Expected UnsupportedFont, got {:?}", other),
        }
    }
}
