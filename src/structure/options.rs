//! Caller-facing options for building a structure descriptor.

use super::key::KeySpec;
use serde::{Deserialize, Serialize};

/// Flat option set recognized by `Structure::new`.
///
/// Every option is optional. Unknown names in a deserialized source are
/// ignored, so configuration written for a newer release still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureOptions {
    /// Grouping identifier for the shaped output.
    #[serde(default)]
    pub node: Option<String>,

    /// Nesting-key identifier for the shaped output.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Requested attribute keys; filtered against the supported set.
    #[serde(default)]
    pub keys: Option<KeySpec>,
}

impl StructureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn keys(mut self, keys: impl Into<KeySpec>) -> Self {
        self.keys = Some(keys.into());
        self
    }
}
