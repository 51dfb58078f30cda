//! Partial overrides for updating an existing structure descriptor.

use super::key::KeySpec;

/// Per-field override state.
///
/// Updates must distinguish "option not supplied" from "explicitly set to
/// absent". A bare `Option` cannot carry both, so each field is tri-state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOverride<T> {
    /// Keep the original descriptor's value.
    Keep,
    /// Explicitly clear the field.
    Clear,
    /// Replace the field with the given value.
    Set(T),
}

impl<T> Default for FieldOverride<T> {
    fn default() -> Self {
        FieldOverride::Keep
    }
}

/// Override set accepted by `Structure::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureOverrides {
    pub node: FieldOverride<String>,
    pub prefix: FieldOverride<String>,
    pub keys: FieldOverride<KeySpec>,
}

impl StructureOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = FieldOverride::Set(node.into());
        self
    }

    pub fn clear_node(mut self) -> Self {
        self.node = FieldOverride::Clear;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = FieldOverride::Set(prefix.into());
        self
    }

    pub fn clear_prefix(mut self) -> Self {
        self.prefix = FieldOverride::Clear;
        self
    }

    pub fn keys(mut self, keys: impl Into<KeySpec>) -> Self {
        self.keys = FieldOverride::Set(keys.into());
        self
    }

    pub fn clear_keys(mut self) -> Self {
        self.keys = FieldOverride::Clear;
        self
    }
}
