//! # kanban-config
//!
//! Layered configuration loading for the Kanban store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KANBAN_*` prefix, `__` as separator)
//! 2. Project-level `.kanban/config.toml`
//! 3. User-level `~/.config/kanban/config.toml`
//! 4. Built-in defaults
//!
//! When the `[store]` section is left unconfigured by every layer, the
//! connection parameters come from the credentials file instead (see
//! [`CredentialsFile`]); a missing file is then a hard error.
//!
//! # Usage
//!
//! ```no_run
//! use kanban_config::{CredentialsFile, KanbanConfig};
//!
//! let config = KanbanConfig::load_with_dotenv().expect("config");
//! let store = config
//!     .store_or_fallback(&CredentialsFile::default())
//!     .expect("store parameters");
//! println!("collection: {}", store.collection);
//! ```

mod credentials;
mod error;
mod general;
mod store;

pub use credentials::{
    CredentialsFile, DEFAULT_CREDENTIALS_PATH, StoreConfigSource, resolve_store_config,
};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KanbanConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl KanbanConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a layer holds a value of the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".kanban/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("KANBAN_").split("__"))
    }

    /// The layered `[store]` section when complete, otherwise the fallback source.
    ///
    /// # Errors
    ///
    /// Returns whatever the fallback raises when the store section is
    /// unconfigured.
    pub fn store_or_fallback(
        &self,
        fallback: &dyn StoreConfigSource,
    ) -> Result<StoreConfig, ConfigError> {
        let explicit = self.store.is_configured().then(|| self.store.clone());
        resolve_store_config(explicit, fallback)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kanban").join("config.toml"))
    }
}
