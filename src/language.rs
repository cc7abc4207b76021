//! Language metadata registry.
//! Maps language tokens (canonical names and aliases) and file extensions to
//! the shebang and comment conventions used when composing a header.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;

/// Immutable description of one supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: String,
    pub aliases: Vec<String>,
    pub extension: String,
    /// Interpreter directive, empty for languages that are not run directly.
    pub shebang: String,
    /// Single-line comment marker, empty for languages without one.
    pub comment: String,
}

impl LanguageEntry {
    pub fn new(name: &str, extension: &str, shebang: &str, comment: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            extension: extension.to_string(),
            shebang: shebang.to_string(),
            comment: comment.to_string(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Canonical name followed by all aliases.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Lower-cases and trims a user supplied token or extension.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Read-only lookup table of languages.
///
/// Entries keep their registration order. When several entries share an
/// extension, the first registered one wins the reverse lookup.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<LanguageEntry>,
    by_token: IndexMap<String, usize>,
    by_extension: IndexMap<String, usize>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a canonical name or alias.
    pub fn lookup_by_token(&self, token: &str) -> Option<&LanguageEntry> {
        self.by_token.get(&normalize(token)).map(|&i| &self.entries[i])
    }

    /// Looks up a file extension (without the leading dot).
    pub fn lookup_by_extension(&self, extension: &str) -> Option<&LanguageEntry> {
        let extension = normalize(extension);
        self.by_extension
            .get(extension.trim_start_matches('.'))
            .map(|&i| &self.entries[i])
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in language table.
    pub fn builtin() -> Self {
        let mut builder = Self::builder();
        for entry in builtin_entries() {
            // The built-in table satisfies the builder invariants; a clash would
            // only drop the later entry.
            if let Err(e) = builder.register(entry) {
                log::warn!("{}", e);
            }
        }
        builder.build()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}

/// Incrementally builds a [`Registry`], enforcing its invariants.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<LanguageEntry>,
    by_token: IndexMap<String, usize>,
    by_extension: IndexMap<String, usize>,
}

impl RegistryBuilder {
    /// Adds an entry.
    ///
    /// # Errors
    /// * `Error::InvalidRegistry` if the name or extension is empty, or if any
    ///   of the entry's tokens is already registered
    pub fn register(&mut self, entry: LanguageEntry) -> Result<&mut Self> {
        let mut entry = entry;
        entry.name = normalize(&entry.name);
        entry.extension = normalize(&entry.extension).trim_start_matches('.').to_string();
        entry.aliases = entry.aliases.iter().map(|a| normalize(a)).collect();

        if entry.name.is_empty() {
            return Err(Error::InvalidRegistry("language name is empty".to_string()));
        }
        if entry.extension.is_empty() {
            return Err(Error::InvalidRegistry(format!(
                "language '{}' has no extension",
                entry.name
            )));
        }
        let tokens: Vec<String> = entry.tokens().map(str::to_string).collect();
        for (i, token) in tokens.iter().enumerate() {
            if self.by_token.contains_key(token) || tokens[..i].contains(token) {
                return Err(Error::InvalidRegistry(format!(
                    "token '{}' is registered twice",
                    token
                )));
            }
        }

        let index = self.entries.len();
        for token in tokens {
            self.by_token.insert(token, index);
        }
        if let Some(&first) = self.by_extension.get(&entry.extension) {
            debug!(
                "Extension '{}' already maps to '{}', '{}' is reachable by token only",
                entry.extension, self.entries[first].name, entry.name
            );
        } else {
            self.by_extension.insert(entry.extension.clone(), index);
        }
        self.entries.push(entry);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
            by_token: self.by_token,
            by_extension: self.by_extension,
        }
    }
}

fn builtin_entries() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new("bash", "sh", "#!/bin/bash", "#").with_aliases(&["shell"]),
        LanguageEntry::new("python", "py", "#!/usr/bin/env python", "#")
            .with_aliases(&["python3"]),
        LanguageEntry::new("perl", "pl", "#!/usr/bin/perl", "#"),
        LanguageEntry::new("ruby", "rb", "#!/usr/bin/env ruby", "#"),
        LanguageEntry::new("php", "php", "#!/usr/bin/env php", "//"),
        LanguageEntry::new("javascript", "js", "#!/usr/bin/env node", "//")
            .with_aliases(&["node"]),
        LanguageEntry::new("nim", "nim", "", "#").with_aliases(&["nimlang"]),
        LanguageEntry::new("c", "c", "", "//"),
        LanguageEntry::new("c++", "cpp", "", "//").with_aliases(&["cpp"]),
        LanguageEntry::new("java", "java", "", "//"),
        LanguageEntry::new("go", "go", "", "//").with_aliases(&["golang"]),
        LanguageEntry::new("html", "html", "", ""),
        LanguageEntry::new("css", "css", "", ""),
        LanguageEntry::new("markdown", "md", "", ""),
        LanguageEntry::new("rust", "rs", "", "//").with_aliases(&["rs"]),
        LanguageEntry::new("kotlin", "kt", "#!/usr/bin/env kotlin", "//"),
        LanguageEntry::new("typescript", "ts", "", "//").with_aliases(&["ts"]),
        LanguageEntry::new("scala", "scala", "#!/usr/bin/env scala", "//"),
        LanguageEntry::new("lua", "lua", "", "--"),
        LanguageEntry::new("r", "r", "", "#"),
        LanguageEntry::new("vhdl", "vhd", "", "--"),
        LanguageEntry::new("verilog", "v", "", "//"),
        LanguageEntry::new("lisp", "lisp", "", ";"),
        LanguageEntry::new("scheme", "scm", "", ";"),
        LanguageEntry::new("haskell", "hs", "", "--"),
        LanguageEntry::new("prolog", "pl", "", "%"),
        LanguageEntry::new("julia", "jl", "", "#"),
    ]
}
