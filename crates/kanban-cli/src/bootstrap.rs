use kanban_config::{
    CredentialsFile, DEFAULT_CREDENTIALS_PATH, KanbanConfig, StoreConfig, StoreConfigSource,
};

use crate::cli::{GlobalFlags, StoreOverrides};

pub fn load_config() -> anyhow::Result<KanbanConfig> {
    KanbanConfig::load_with_dotenv().map_err(anyhow::Error::from)
}

/// Connection parameters for this run.
///
/// Command-line overrides sit on top of the layered `[store]` section. When
/// that still leaves the store unconfigured, the credentials file supplies
/// the parameters and the overrides are applied on top of it.
pub fn resolve_store(config: &KanbanConfig, flags: &GlobalFlags) -> anyhow::Result<StoreConfig> {
    let credentials = CredentialsFile::new(
        flags
            .credentials
            .as_deref()
            .unwrap_or(DEFAULT_CREDENTIALS_PATH),
    );
    resolve_with(config, &flags.store, &credentials)
}

fn resolve_with(
    config: &KanbanConfig,
    overrides: &StoreOverrides,
    fallback: &dyn StoreConfigSource,
) -> anyhow::Result<StoreConfig> {
    let layered = apply_overrides(config.store.clone(), overrides);
    if layered.is_configured() {
        return Ok(layered);
    }

    tracing::warn!("store section not configured; reading credentials file");
    let from_file = fallback.load()?;
    Ok(apply_overrides(from_file, overrides))
}

fn apply_overrides(mut store: StoreConfig, overrides: &StoreOverrides) -> StoreConfig {
    if let Some(uri) = &overrides.uri {
        store.uri.clone_from(uri);
    }
    if let Some(namespace) = &overrides.namespace {
        store.namespace.clone_from(namespace);
    }
    if let Some(collection) = &overrides.collection {
        store.collection.clone_from(collection);
    }
    store
}
