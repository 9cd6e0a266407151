use sqlx::PgConnection;

use crate::pkg::internal::adaptors::items::spec::{ItemEntry, NewItem};
use crate::prelude::Result;

pub struct ItemMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ItemMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ItemMutator { pool }
    }

    pub async fn create(&mut self, item: NewItem) -> Result<ItemEntry> {
        let row = sqlx::query_as::<_, ItemEntry>(
            r#"
            INSERT INTO test_items (description, image)
            VALUES ($1, $2)
            RETURNING id, description, image
            "#,
        )
        .bind(&item.description)
        .bind(&item.image)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&mut self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM test_items WHERE id = $1")
            .bind(id)
            .execute(&mut *self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
