//! Language resolution.
//! Decides which registry entry a run targets from the output file name and
//! an optional explicit language token.

use crate::error::{Error, Result};
use crate::language::{normalize, LanguageEntry, Registry};
use log::debug;
use std::path::{Path, PathBuf};

/// A successfully resolved language together with the final output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub entry: &'a LanguageEntry,
    /// Output stem joined with the registry's canonical extension.
    pub path: PathBuf,
}

/// Splits an output path into the path without its suffix and the suffix.
///
/// Only the final path component is considered, and an empty suffix
/// (`script.`) counts as no suffix.
pub fn split_output<P: AsRef<Path>>(output: P) -> (PathBuf, Option<String>) {
    let output = output.as_ref();
    let Some(file_name) = output.file_name().and_then(|n| n.to_str()) else {
        return (output.to_path_buf(), None);
    };

    match file_name.rsplit_once('.') {
        Some((stem, suffix)) if !stem.is_empty() => {
            let stem_path = output.with_file_name(stem);
            if suffix.is_empty() {
                (stem_path, None)
            } else {
                (stem_path, Some(suffix.to_string()))
            }
        }
        _ => (output.to_path_buf(), None),
    }
}

/// Resolves the language for an output file.
///
/// # Arguments
/// * `registry` - Language table to resolve against
/// * `output` - Target file name, with or without extension
/// * `token` - Explicit language token, empty when not given
///
/// # Errors
/// * `Error::InvalidOutput` if the output has no file name (`..`, `/`)
/// * `Error::AmbiguousLanguage` if both a suffix and a token are present
/// * `Error::MissingLanguage` if neither is present
/// * `Error::UnsupportedLanguage` if the key matches no token nor extension
pub fn resolve<'a, P: AsRef<Path>>(
    registry: &'a Registry,
    output: P,
    token: &str,
) -> Result<Resolution<'a>> {
    let output = output.as_ref();
    let (stem, suffix) = split_output(output);
    let Some(stem_name) = stem.file_name().map(|n| n.to_os_string()) else {
        return Err(Error::InvalidOutput { output: output.display().to_string() });
    };
    let token = normalize(token);

    let key = match (suffix, token.is_empty()) {
        (Some(suffix), true) => normalize(&suffix),
        (Some(_), false) => {
            return Err(Error::AmbiguousLanguage {
                output: output.display().to_string(),
                token,
            })
        }
        (None, true) => return Err(Error::MissingLanguage),
        (None, false) => token,
    };

    debug!("Resolving language key '{}' for '{}'", key, output.display());

    let entry = registry
        .lookup_by_token(&key)
        .or_else(|| registry.lookup_by_extension(&key))
        .ok_or_else(|| Error::UnsupportedLanguage { token: key.clone() })?;

    let mut file_name = stem_name;
    file_name.push(".");
    file_name.push(&entry.extension);
    let path = stem.with_file_name(file_name);

    debug!("Resolved '{}' as {} -> '{}'", key, entry.name, path.display());

    Ok(Resolution { entry, path })
}
