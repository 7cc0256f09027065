use kanban_config::{KanbanConfig, StoreConfig};
use kanban_db::StoreGateway;

/// Shared resources initialized once at startup.
pub struct AppContext {
    pub gateway: StoreGateway,
    pub config: KanbanConfig,
}

impl AppContext {
    pub async fn init(store: &StoreConfig, config: KanbanConfig) -> anyhow::Result<Self> {
        let gateway = StoreGateway::connect(store).await?;
        Ok(Self { gateway, config })
    }
}
