use thiserror::Error;

use tracker_config::ConfigError;
use tracker_core::CoreError;

/// Unified error type for the tracker facade.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Import failed: {0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Import(message) => TrackerError::Import(message),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                TrackerError::Storage(message)
            }
            CoreError::Io(err) => TrackerError::Storage(err.to_string()),
        }
    }
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TrackerError::Config(io.to_string()),
            ConfigError::Serde(message) => TrackerError::Config(message),
        }
    }
}
