use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_title(&mut self, title: &str) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, location, required_skills, description
             FROM job_postings WHERE title = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(title)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, location, required_skills, description
             FROM job_postings ORDER BY id ASC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }
}
