use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, NewJobPosting};
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: NewJobPosting) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO job_postings (title, location, required_skills, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, location, required_skills, description
            "#,
        )
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.required_skills)
        .bind(&job.description)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
