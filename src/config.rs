//! Configuration System
//!
//! File-backed defaults for structure descriptors. A global config file and
//! per-workspace overlays are merged in precedence order, and the `structure`
//! table acts as the descriptor's default namespace. Lookup failures degrade
//! to absent defaults rather than failing descriptor construction.

use crate::logging::LoggingConfig;
use crate::structure::StructureOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrshapeConfig {
    /// Default structure descriptor options
    #[serde(default)]
    pub structure: Option<StructureOptions>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Lookup contract for process-wide descriptor defaults.
///
/// `Structure::from_defaults` goes through this seam, so tests and embedders
/// can supply deterministic fixtures instead of reading real files.
pub trait DefaultsProvider {
    /// Configuration set for the structure namespace, if one is configured.
    fn lookup(&self) -> Option<StructureOptions>;
}

/// File-backed defaults provider rooted at a workspace directory.
#[derive(Debug, Clone)]
pub struct FileDefaults {
    workspace_root: PathBuf,
}

impl FileDefaults {
    pub fn new(workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
        }
    }
}

impl DefaultsProvider for FileDefaults {
    fn lookup(&self) -> Option<StructureOptions> {
        match ConfigLoader::load(&self.workspace_root) {
            Ok(config) => config.structure,
            Err(err) => {
                warn!(
                    error = %err,
                    "Failed to load configuration; treating structure defaults as absent"
                );
                None
            }
        }
    }
}

/// In-memory defaults provider for tests and embedders that manage
/// configuration themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticDefaults {
    structure: Option<StructureOptions>,
}

impl StaticDefaults {
    pub fn new(structure: Option<StructureOptions>) -> Self {
        Self { structure }
    }
}

impl DefaultsProvider for StaticDefaults {
    fn lookup(&self) -> Option<StructureOptions> {
        self.structure.clone()
    }
}
