pub mod contacts;

use crate::infra::config::{Config, StoreBackend};
use contacts::{ContactStore, InMemoryContactStore, PostgresContactStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Opens the record store selected by `config`.
pub async fn open_contact_store(config: &Config) -> anyhow::Result<Arc<dyn ContactStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config.database_url()?;
            let store = PostgresContactStore::connect(url, config.db_max_connections).await?;
            info!(max_connections = config.db_max_connections, "connected to Postgres contact store");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("using in-memory contact store; data is lost on shutdown");
            Ok(Arc::new(InMemoryContactStore::new()))
        }
    }
}
