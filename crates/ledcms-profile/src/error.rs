//! Error types for profile configuration.

use ledcms_core::ColorError;
use thiserror::Error;

/// Result type for profile configuration.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Errors that can occur while loading or building a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error reading a profile file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Semantically invalid configuration.
    #[error("invalid profile config: {0}")]
    Config(String),

    /// The described profile cannot be built.
    #[error(transparent)]
    Color(#[from] ColorError),
}
