//! Configuration loading facade.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ErrshapeConfig;
use crate::error::SetupError;
use std::path::{Path, PathBuf};

/// Loads merged configuration for a workspace.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full precedence: merge policy defaults, then
    /// the global file, then workspace files.
    pub fn load(workspace_root: &Path) -> Result<ErrshapeConfig, SetupError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        builder = workspace_file::add_to_builder(builder, workspace_root)?;

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a single file, skipping the global and
    /// workspace sources.
    pub fn load_from_file(path: &Path) -> Result<ErrshapeConfig, SetupError> {
        let config = merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Path to the global config file, when a config directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
