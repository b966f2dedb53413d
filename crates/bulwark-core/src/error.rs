//! Error types for bulwark-core

use thiserror::Error;

use crate::info::ErrorInfo;

/// Result type alias for bulwark-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bulwark-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// A panic was intercepted by a boundary
    #[error("panic intercepted: {0}")]
    Intercepted(#[from] ErrorInfo),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
