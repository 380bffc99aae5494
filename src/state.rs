use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::career::{dataset, CompensationRecord};
use crate::config::AppConfig;
use crate::database::{manager, MemoryUserStore, PgUserStore, UserStore};
use crate::services::UserService;

/// Shared, read-only handles passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: UserService,
    pub records: Arc<Vec<CompensationRecord>>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>, records: Vec<CompensationRecord>) -> Self {
        Self {
            config: Arc::new(config),
            users: UserService::new(store),
            records: Arc::new(records),
        }
    }

    /// Load the dataset and open the user store described by `config`.
    /// Without `DATABASE_URL` users live in memory for the process lifetime.
    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let records = dataset::load(&config.career.data_path)?;

        let store: Arc<dyn UserStore> = if config.database.url.is_some() {
            let pool = manager::connect(&config.database)
                .await
                .context("failed to connect to the database")?;
            let store = PgUserStore::new(pool);
            store
                .ensure_schema()
                .await
                .context("failed to prepare the users table")?;
            Arc::new(store)
        } else {
            warn!("DATABASE_URL not set, registered users are kept in memory only");
            Arc::new(MemoryUserStore::new())
        };

        info!("User store backend: {}", store.backend());
        Ok(Self::new(config, store, records))
    }
}
