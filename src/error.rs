//! Error types for the errshape setup surfaces.

use thiserror::Error;

/// Errors from loading default configuration or initializing logging.
///
/// Descriptor construction itself never fails; only the surrounding setup
/// machinery can.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for SetupError {
    fn from(err: config::ConfigError) -> Self {
        SetupError::ConfigError(err.to_string())
    }
}
