//! Fallback loading of store parameters from a `key=value` credentials file.
//!
//! ```text
//! uri=kanban.db
//! dbcontext=kanban
//! collection=showcase
//! ```
//!
//! The loader sits behind [`StoreConfigSource`] so callers (and tests) can
//! swap it for any other source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::store::StoreConfig;

/// Fixed location of the credentials file, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "resources/credentials.txt";

/// Something that can produce store connection parameters.
pub trait StoreConfigSource {
    /// Produce a complete `StoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the source is absent or incomplete.
    fn load(&self) -> Result<StoreConfig, ConfigError>;
}

/// Explicit parameters act as their own source.
impl StoreConfigSource for StoreConfig {
    fn load(&self) -> Result<StoreConfig, ConfigError> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// A credentials file of `key=value` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsFile {
    path: PathBuf,
}

impl CredentialsFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_pairs(&self) -> Result<HashMap<String, String>, ConfigError> {
        let malformed = |reason: String| ConfigError::Malformed {
            path: self.path.clone(),
            reason,
        };

        let iter = dotenvy::from_path_iter(&self.path).map_err(|e| malformed(e.to_string()))?;
        let mut pairs = HashMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| malformed(e.to_string()))?;
            pairs.insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(pairs)
    }

    fn required(
        &self,
        pairs: &mut HashMap<String, String>,
        keys: &[&str],
    ) -> Result<String, ConfigError> {
        keys.iter()
            .find_map(|key| pairs.remove(*key))
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingKey {
                path: self.path.clone(),
                key: keys[0].to_string(),
            })
    }
}

impl Default for CredentialsFile {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIALS_PATH)
    }
}

impl StoreConfigSource for CredentialsFile {
    fn load(&self) -> Result<StoreConfig, ConfigError> {
        if !self.path.is_file() {
            return Err(ConfigError::CredentialsNotFound {
                path: self.path.clone(),
            });
        }

        let mut pairs = self.read_pairs()?;
        Ok(StoreConfig {
            uri: self.required(&mut pairs, &["uri"])?,
            namespace: self.required(&mut pairs, &["dbcontext", "namespace"])?,
            collection: self.required(&mut pairs, &["collection"])?,
            auth_token: pairs.remove("auth_token").unwrap_or_default(),
        })
    }
}

/// Pick the explicit parameters when given, otherwise ask the fallback.
///
/// # Errors
///
/// Returns `ConfigError::NotConfigured` for incomplete explicit parameters,
/// or whatever the fallback source raises (typically
/// `ConfigError::CredentialsNotFound`).
pub fn resolve_store_config(
    explicit: Option<StoreConfig>,
    fallback: &dyn StoreConfigSource,
) -> Result<StoreConfig, ConfigError> {
    match explicit {
        Some(config) => config.load(),
        None => fallback.load(),
    }
}
