//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// No explicit store parameters were given and the credentials file is absent.
    #[error("Credentials file not found: {}", path.display())]
    CredentialsNotFound { path: PathBuf },

    /// The credentials file exists but lacks a required key.
    #[error("Credentials file {} is missing key '{key}'", path.display())]
    MissingKey { path: PathBuf, key: String },

    /// The credentials file could not be read as `key=value` lines.
    #[error("Malformed credentials file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A required configuration section is not configured.
    #[error("Configuration section '{section}' is not configured (missing: {missing})")]
    NotConfigured { section: String, missing: String },
}
