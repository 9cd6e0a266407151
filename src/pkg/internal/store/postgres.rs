use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{ItemRepo, JobRepo};
use crate::{
    pkg::{
        internal::adaptors::{
            items::{
                mutators::ItemMutator,
                selectors::ItemSelector,
                spec::{ItemEntry, NewItem},
            },
            jobs::{
                mutators::JobMutator,
                selectors::JobSelector,
                spec::{JobEntry, NewJobPosting},
            },
        },
        server::state::GetTxn,
    },
    prelude::Result,
};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: Arc<PgPool>,
}

impl PgStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl ItemRepo for PgStore {
    async fn list(&self) -> Result<Vec<ItemEntry>> {
        let mut conn = self.pool.acquire().await?;
        let items = ItemSelector::new(&mut conn).get_all().await?;
        Ok(items)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<ItemEntry>> {
        let mut conn = self.pool.acquire().await?;
        let item = ItemSelector::new(&mut conn).get_by_id(id).await?;
        Ok(item)
    }

    async fn insert(&self, item: NewItem) -> Result<ItemEntry> {
        let mut tx = self.pool.begin_txn().await?;
        let entry = ItemMutator::new(&mut tx).create(item).await?;
        tx.commit().await?;
        tracing::debug!("inserted item {}", entry.id);
        Ok(entry)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tx = self.pool.begin_txn().await?;
        let deleted = ItemMutator::new(&mut tx).delete(id).await?;
        tx.commit().await?;
        Ok(deleted)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("select 1").execute(&*self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl JobRepo for PgStore {
    async fn exists(&self, title: &str) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let existing = JobSelector::new(&mut conn).get_by_title(title).await?;
        Ok(existing.is_some())
    }

    async fn insert(&self, job: NewJobPosting) -> Result<JobEntry> {
        let mut tx = self.pool.begin_txn().await?;
        let entry = JobMutator::new(&mut tx).create(job).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<JobEntry>> {
        let mut conn = self.pool.acquire().await?;
        let jobs = JobSelector::new(&mut conn).get_all().await?;
        Ok(jobs)
    }
}
