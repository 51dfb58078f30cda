//! Structure Descriptors
//!
//! A structure descriptor tells an error-formatting layer how to shape an
//! error value: which grouping node or nesting prefix to emit under, and
//! which error attributes to include, in which order. Descriptors are plain
//! immutable values; building one never fails.

use crate::config::DefaultsProvider;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use serde::{Deserialize, Serialize};

mod key;
mod options;
mod overrides;

pub use key::{ErrorKey, KeySpec};
pub use options::StructureOptions;
pub use overrides::{FieldOverride, StructureOverrides};

use key::filter_keys;

/// How to shape a formatted error: grouping node, nesting prefix, and the
/// ordered attribute keys to include.
///
/// `node` and `prefix` are independent; both may be set, though typical
/// configurations use only one. Every key is a member of the supported set;
/// requests for anything else are dropped at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Grouping identifier, if any.
    pub node: Option<String>,

    /// Nesting-key identifier, if any.
    pub prefix: Option<String>,

    /// Ordered attribute keys, restricted to the supported set.
    #[serde(default)]
    pub keys: Vec<ErrorKey>,
}

impl Structure {
    /// Build a descriptor from caller-supplied options.
    ///
    /// `node` and `prefix` are taken verbatim; `keys` is filtered against the
    /// supported set, dropping unsupported identifiers while preserving the
    /// requested order and multiplicity.
    pub fn new(options: StructureOptions) -> Self {
        Self::new_with(options, &TracingDiagnostics)
    }

    /// Like `new`, reporting through the given diagnostics sink.
    pub fn new_with(options: StructureOptions, diagnostics: &dyn Diagnostics) -> Self {
        Structure {
            node: options.node,
            prefix: options.prefix,
            keys: filter_keys(options.keys.as_ref(), diagnostics),
        }
    }

    /// Build a descriptor from process-wide default configuration.
    ///
    /// A provider that returns no configuration falls through to the same
    /// path as fully absent options.
    pub fn from_defaults(provider: &dyn DefaultsProvider) -> Self {
        Self::from_defaults_with(provider, &TracingDiagnostics)
    }

    /// Like `from_defaults`, reporting through the given diagnostics sink.
    pub fn from_defaults_with(
        provider: &dyn DefaultsProvider,
        diagnostics: &dyn Diagnostics,
    ) -> Self {
        Self::new_with(provider.lookup().unwrap_or_default(), diagnostics)
    }

    /// Apply partial overrides, producing a new descriptor.
    ///
    /// Fields the override set does not touch carry over unchanged. A
    /// supplied key specification is filtered and replaces the old keys
    /// outright; the old keys are neither re-filtered nor merged in.
    pub fn update(&self, overrides: StructureOverrides) -> Self {
        self.update_with(overrides, &TracingDiagnostics)
    }

    /// Like `update`, reporting through the given diagnostics sink.
    pub fn update_with(
        &self,
        overrides: StructureOverrides,
        diagnostics: &dyn Diagnostics,
    ) -> Self {
        Structure {
            node: merge_field(&self.node, overrides.node),
            prefix: merge_field(&self.prefix, overrides.prefix),
            keys: match overrides.keys {
                FieldOverride::Keep => self.keys.clone(),
                FieldOverride::Clear => filter_keys(None, diagnostics),
                FieldOverride::Set(request) => filter_keys(Some(&request), diagnostics),
            },
        }
    }
}

fn merge_field(original: &Option<String>, change: FieldOverride<String>) -> Option<String> {
    match change {
        FieldOverride::Keep => original.clone(),
        FieldOverride::Clear => None,
        FieldOverride::Set(value) => Some(value),
    }
}
