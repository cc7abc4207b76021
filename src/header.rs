//! Header block composition.

use crate::language::LanguageEntry;
use std::fmt;

/// Ordered lines of a generated header, written to disk verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderBlock {
    lines: Vec<String>,
}

impl HeaderBlock {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for HeaderBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Composes the header for a resolved language.
///
/// The block holds the shebang (omitted when empty), every banner row
/// prefixed by the comment marker, a bare marker line and the description.
/// Without any banner row the author is credited on a plain line instead.
pub fn compose(
    entry: &LanguageEntry,
    author: &str,
    description: &str,
    banners: &[Vec<String>],
) -> HeaderBlock {
    let marker = entry.comment.as_str();
    let mut lines = Vec::new();

    if !entry.shebang.is_empty() {
        lines.push(entry.shebang.clone());
    }
    if banners.iter().all(Vec::is_empty) {
        lines.push(labelled(marker, "By", author));
    }
    for banner in banners {
        lines.extend(banner.iter().map(|row| format!("{}{}", marker, row)));
    }
    lines.push(marker.to_string());
    lines.push(labelled(marker, "Description:", description));

    HeaderBlock { lines }
}

fn labelled(marker: &str, label: &str, text: &str) -> String {
    if marker.is_empty() {
        format!("{} {}", label, text)
    } else {
        format!("{} {} {}", marker, label, text)
    }
}
