//! Repository seams between the handlers/seeder and the storage engine.
//!
//! Both traits are implemented by [`postgres::PgStore`] and
//! [`memory::MemoryStore`]; which one is used is decided by
//! `settings.storage_backend`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    pkg::internal::adaptors::{
        items::spec::{ItemEntry, NewItem},
        jobs::spec::{JobEntry, NewJobPosting},
    },
    prelude::Result,
};

#[async_trait]
pub trait ItemRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<ItemEntry>>;

    async fn get_by_id(&self, id: i32) -> Result<Option<ItemEntry>>;

    async fn insert(&self, item: NewItem) -> Result<ItemEntry>;

    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i32) -> Result<bool>;

    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait JobRepo: Send + Sync {
    async fn exists(&self, title: &str) -> Result<bool>;

    async fn insert(&self, job: NewJobPosting) -> Result<JobEntry>;

    async fn list(&self) -> Result<Vec<JobEntry>>;
}
