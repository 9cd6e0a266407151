use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    pkg::{internal::adaptors::jobs::spec::JobEntry, server::state::AppState},
    prelude::Result,
};

#[derive(Serialize)]
pub struct JobList {
    pub jobs: Vec<JobEntry>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<JobList>> {
    let jobs = state.jobs.list().await?;
    tracing::debug!("listing {} job postings", jobs.len());
    Ok(Json(JobList { jobs }))
}
