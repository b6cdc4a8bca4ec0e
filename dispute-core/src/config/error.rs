use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating agent configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid timeout '{value}' in {origin}: expected a positive number of seconds")]
    InvalidTimeout { origin: String, value: String },

    #[error("responder identifier from {origin} must not be empty")]
    EmptyIdentifier { origin: String },

    #[error("dispatch endpoint from {origin} must not be empty")]
    EmptyEndpoint { origin: String },
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::NotFound { path } => {
                format!("No configuration file at {}.", path.display())
            }
            ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => format!(
                "The configuration file {} could not be loaded. Check its contents.",
                path.display()
            ),
            ConfigError::InvalidTimeout { origin, .. }
            | ConfigError::EmptyIdentifier { origin }
            | ConfigError::EmptyEndpoint { origin } => {
                format!("The agent settings from {origin} are incomplete or invalid.")
            }
        }
    }
}
