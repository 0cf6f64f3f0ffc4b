use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the TOML configuration.
///
/// Pagination itself never fails: malformed query values are normalized,
/// so this is the only error type the crate exposes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
