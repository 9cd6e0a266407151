use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ItemRepo, JobRepo};
use crate::{
    pkg::internal::adaptors::{
        items::spec::{ItemEntry, NewItem},
        jobs::spec::{JobEntry, NewJobPosting},
    },
    prelude::Result,
};

/// Process-local store. Ids start at 1 and are never reused, like a
/// `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Table<ItemEntry>>,
    jobs: RwLock<Table<JobEntry>>,
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepo for MemoryStore {
    async fn list(&self) -> Result<Vec<ItemEntry>> {
        Ok(self.items.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<ItemEntry>> {
        Ok(self.items.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, item: NewItem) -> Result<ItemEntry> {
        let mut table = self.items.write().await;
        let entry = ItemEntry {
            id: table.allocate_id(),
            description: item.description,
            image: item.image,
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        Ok(self.items.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl JobRepo for MemoryStore {
    async fn exists(&self, title: &str) -> Result<bool> {
        Ok(self
            .jobs
            .read()
            .await
            .rows
            .values()
            .any(|job| job.title == title))
    }

    async fn insert(&self, job: NewJobPosting) -> Result<JobEntry> {
        let mut table = self.jobs.write().await;
        let entry = JobEntry {
            id: table.allocate_id(),
            title: job.title,
            location: job.location,
            required_skills: job.required_skills,
            description: job.description,
        };
        table.rows.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<JobEntry>> {
        Ok(self.jobs.read().await.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(description: &str) -> NewItem {
        NewItem {
            description: description.to_string(),
            image: format!("uploads/{}.png", description),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let a = ItemRepo::insert(&store, new_item("a")).await.unwrap();
        let b = ItemRepo::insert(&store, new_item("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(ItemRepo::delete(&store, b.id).await.unwrap());
        let c = ItemRepo::insert(&store, new_item("c")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn delete_only_touches_the_given_id() {
        let store = MemoryStore::new();
        let a = ItemRepo::insert(&store, new_item("a")).await.unwrap();
        let b = ItemRepo::insert(&store, new_item("b")).await.unwrap();

        assert!(!ItemRepo::delete(&store, 42).await.unwrap());
        assert!(ItemRepo::delete(&store, a.id).await.unwrap());

        let rest = ItemRepo::list(&store).await.unwrap();
        assert_eq!(rest, vec![b.clone()]);
        assert_eq!(store.get_by_id(a.id).await.unwrap(), None);
        assert_eq!(store.get_by_id(b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn job_exists_matches_exact_title() {
        let store = MemoryStore::new();
        JobRepo::insert(
            &store,
            NewJobPosting {
                title: "QA Engineer".into(),
                location: "Chicago, IL".into(),
                required_skills: "Selenium".into(),
                description: "Ensure quality".into(),
            },
        )
        .await
        .unwrap();

        assert!(store.exists("QA Engineer").await.unwrap());
        assert!(!store.exists("qa engineer").await.unwrap());
        assert!(!store.exists("QA").await.unwrap());
    }
}
