use std::sync::Arc;

use crate::{
    conf::{settings, StorageBackend},
    pkg::{
        internal::{
            seed::{seed_jobs, JOB_SEEDS},
            store::{memory::MemoryStore, postgres::PgStore, JobRepo},
        },
        server::state::db_pool,
    },
    prelude::Result,
};

pub async fn run() -> Result<()> {
    let repo: Arc<dyn JobRepo> = match settings.storage_backend {
        StorageBackend::Postgres => Arc::new(PgStore::new(Arc::new(db_pool()?))),
        StorageBackend::Memory => {
            tracing::warn!("seeding in-memory storage, nothing will persist");
            Arc::new(MemoryStore::new())
        }
    };

    let report = seed_jobs(repo.as_ref(), JOB_SEEDS).await?;
    for line in report.lines() {
        println!("{}", line);
    }
    Ok(())
}
