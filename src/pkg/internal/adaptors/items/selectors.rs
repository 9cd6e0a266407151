use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::items::spec::ItemEntry, prelude::Result};

pub struct ItemSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ItemSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ItemSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<ItemEntry>> {
        let row = sqlx::query_as::<_, ItemEntry>(
            "SELECT id, description, image FROM test_items WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<ItemEntry>> {
        let rows = sqlx::query_as::<_, ItemEntry>(
            "SELECT id, description, image FROM test_items ORDER BY id ASC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
