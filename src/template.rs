//! Site template expansion.
//!
//! Site files are generated from `*.in` templates whose `@NAME@` tokens are
//! replaced with pre-resolved literal values. Substitution is verbatim: no
//! trimming, no case change, and an empty value expands to an empty string.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// Token syntax: `@NAME@` where NAME is an identifier.
/// A lone `@` or a non-identifier span between `@`s passes through untouched.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z_][A-Za-z0-9_]*)@").expect("should build valid token regex")
});

/// Errors that can occur during template expansion
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template at {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write rendered output to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Unresolved template token @{name}@")]
    UnresolvedToken { name: String },
}

/// How to treat a `@NAME@` token with no registered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTokens {
    /// Fail expansion (default)
    Error,
    /// Expand to the empty string, as CMake's `configure_file` would
    Empty,
}

/// Named values for `@NAME@` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: std::collections::BTreeMap<String, String>,
}

impl Substitutions {
    /// Create an empty substitution set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token value. Later registrations replace earlier ones.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Look up a token value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Self::new();
        for (name, value) in iter {
            subs.set(name, value);
        }
        subs
    }
}

/// Expand every `@NAME@` token in `text`, verbatim.
pub fn expand(
    text: &str,
    subs: &Substitutions,
    missing: MissingTokens,
) -> Result<String, TemplateError> {
    if missing == MissingTokens::Error
        && let Some(name) = first_unresolved(text, subs)
    {
        return Err(TemplateError::UnresolvedToken { name });
    }

    let expanded = TOKEN_RE.replace_all(text, |caps: &regex::Captures<'_>| {
        let name = caps.get(1).map_or("", |m| m.as_str());
        subs.get(name).unwrap_or("").to_string()
    });

    Ok(expanded.into_owned())
}

/// Find the first token in `text` with no registered value.
fn first_unresolved(text: &str, subs: &Substitutions) -> Option<String> {
    TOKEN_RE.captures_iter(text).find_map(|caps| {
        let name = caps.get(1).map_or("", |m| m.as_str());
        subs.get(name).is_none().then(|| name.to_string())
    })
}

/// Read a template file, expand it, and write the rendered output.
pub fn render_file(
    template: &Path,
    output: &Path,
    subs: &Substitutions,
    missing: MissingTokens,
) -> Result<(), TemplateError> {
    let text = fs::read_to_string(template).map_err(|source| TemplateError::ReadError {
        path: template.display().to_string(),
        source,
    })?;

    let rendered = expand(&text, subs, missing)?;

    fs::write(output, rendered).map_err(|source| TemplateError::WriteError {
        path: output.display().to_string(),
        source,
    })
}
