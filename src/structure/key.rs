//! Supported error attribute keys and the requested-key filter.

use crate::diagnostics::Diagnostics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error attributes an error-formatting layer can be asked to include.
///
/// This is the whole supported set; requests for anything else are dropped
/// by the filter rather than carried as free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKey {
    Code,
    File,
    Function,
    Line,
    Message,
    Module,
}

impl ErrorKey {
    /// All supported keys, in canonical order.
    pub const ALL: [ErrorKey; 6] = [
        ErrorKey::Code,
        ErrorKey::File,
        ErrorKey::Function,
        ErrorKey::Line,
        ErrorKey::Message,
        ErrorKey::Module,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKey::Code => "code",
            ErrorKey::File => "file",
            ErrorKey::Function => "function",
            ErrorKey::Line => "line",
            ErrorKey::Message => "message",
            ErrorKey::Module => "module",
        }
    }

    /// Parse an identifier, returning `None` for unsupported ones.
    pub fn parse(identifier: &str) -> Option<ErrorKey> {
        ErrorKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == identifier)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested key specification: a single identifier or an ordered sequence.
///
/// Identifiers are raw here; support is decided by the filter, not the
/// representation, so configuration may name keys this crate does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    One(String),
    Many(Vec<String>),
}

impl KeySpec {
    /// Normalize to an ordered identifier sequence.
    pub fn identifiers(&self) -> &[String] {
        match self {
            KeySpec::One(identifier) => std::slice::from_ref(identifier),
            KeySpec::Many(identifiers) => identifiers,
        }
    }
}

impl From<&str> for KeySpec {
    fn from(identifier: &str) -> Self {
        KeySpec::One(identifier.to_string())
    }
}

impl From<String> for KeySpec {
    fn from(identifier: String) -> Self {
        KeySpec::One(identifier)
    }
}

impl From<Vec<String>> for KeySpec {
    fn from(identifiers: Vec<String>) -> Self {
        KeySpec::Many(identifiers)
    }
}

impl From<Vec<&str>> for KeySpec {
    fn from(identifiers: Vec<&str>) -> Self {
        KeySpec::Many(identifiers.into_iter().map(str::to_string).collect())
    }
}

impl From<ErrorKey> for KeySpec {
    fn from(key: ErrorKey) -> Self {
        KeySpec::One(key.as_str().to_string())
    }
}

impl From<Vec<ErrorKey>> for KeySpec {
    fn from(keys: Vec<ErrorKey>) -> Self {
        KeySpec::Many(keys.iter().map(|key| key.as_str().to_string()).collect())
    }
}

/// Restrict a requested key specification to the supported set.
///
/// The result is the longest sub-sequence of the normalized request, in the
/// original relative order, containing only supported keys. Duplicates are
/// preserved. An absent request is treated as an empty sequence. When the
/// result is empty, a single warning naming the original request goes to the
/// diagnostics sink; the filter itself never fails.
pub(crate) fn filter_keys(
    requested: Option<&KeySpec>,
    diagnostics: &dyn Diagnostics,
) -> Vec<ErrorKey> {
    let identifiers: &[String] = requested.map(KeySpec::identifiers).unwrap_or(&[]);

    let keys: Vec<ErrorKey> = identifiers
        .iter()
        .filter_map(|identifier| ErrorKey::parse(identifier))
        .collect();

    if keys.is_empty() {
        diagnostics.warn(&format!(
            "Requested error keys {:?} contain no supported keys. \
             The structure will include no error attributes (supported: {}).",
            identifiers,
            supported_key_list(),
        ));
    }

    keys
}

fn supported_key_list() -> String {
    ErrorKey::ALL
        .iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
