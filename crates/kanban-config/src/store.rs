//! Store connection parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Connection parameters for the document store.
///
/// `uri` is a local libSQL path (`kanban.db`, `file:kanban.db`, `:memory:`)
/// or a remote `libsql://` / `https://` URL. `namespace` and `collection`
/// select the partition of the documents table the gateway works on.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Endpoint URI.
    #[serde(default)]
    pub uri: String,

    /// Database namespace. `dbcontext` is accepted as an alias.
    #[serde(default, alias = "dbcontext")]
    pub namespace: String,

    /// Collection name.
    #[serde(default)]
    pub collection: String,

    /// Auth token for remote endpoints. Ignored for local paths.
    #[serde(default)]
    pub auth_token: String,
}

impl StoreConfig {
    #[must_use]
    pub fn new(
        uri: impl Into<String>,
        namespace: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            namespace: namespace.into(),
            collection: collection.into(),
            auth_token: String::new(),
        }
    }

    /// In-memory store, for tests and throwaway sessions.
    #[must_use]
    pub fn in_memory(namespace: impl Into<String>, collection: impl Into<String>) -> Self {
        Self::new(":memory:", namespace, collection)
    }

    /// All three connection parameters are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The endpoint is a remote libSQL server rather than a local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["libsql://", "http://", "https://"]
            .iter()
            .any(|scheme| self.uri.starts_with(scheme))
    }

    /// Check that all three connection parameters are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` naming every empty parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::NotConfigured {
                section: "store".to_string(),
                missing: missing.join(", "),
            })
        }
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("uri", &self.uri),
            ("namespace", &self.namespace),
            ("collection", &self.collection),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
