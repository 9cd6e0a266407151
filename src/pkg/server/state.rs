use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool, Pool, Postgres, Transaction};

use crate::{
    conf::{settings, StorageBackend},
    pkg::internal::{
        store::{memory::MemoryStore, postgres::PgStore, ItemRepo, JobRepo},
        uploads::MediaStorage,
    },
    prelude::Result,
};

pub fn db_pool() -> Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.database_pool_max_connections)
        .connect_lazy(&settings.database_url)?;
    Ok(pool)
}

#[async_trait]
pub trait GetTxn {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>>;
}

#[async_trait]
impl GetTxn for PgPool {
    async fn begin_txn(&self) -> Result<Transaction<'static, Postgres>> {
        Ok(self.begin().await?)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemRepo>,
    pub jobs: Arc<dyn JobRepo>,
    pub media: Arc<MediaStorage>,
}

impl AppState {
    pub async fn new() -> Result<AppState> {
        let media = MediaStorage::new(&settings.media_root);
        let state = match settings.storage_backend {
            StorageBackend::Postgres => {
                let store = Arc::new(PgStore::new(Arc::new(db_pool()?)));
                AppState::from_parts(store.clone(), store, media)
            }
            StorageBackend::Memory => {
                tracing::warn!("using in-memory storage, data is lost on exit");
                let store = Arc::new(MemoryStore::new());
                AppState::from_parts(store.clone(), store, media)
            }
        };
        Ok(state)
    }

    pub fn from_parts(
        items: Arc<dyn ItemRepo>,
        jobs: Arc<dyn JobRepo>,
        media: MediaStorage,
    ) -> AppState {
        AppState {
            items,
            jobs,
            media: Arc::new(media),
        }
    }
}
